pub mod keygen;

pub use keygen::{encode_sec1_pem, generate};
