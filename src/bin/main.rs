use anyhow::Context;
use igvm_signing_keygen::keygen;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let secret_key = keygen::generate();
    log::debug!("generated P-384 signing key");

    // Encode before touching stdout so a failure emits no partial output.
    let pem = keygen::encode_sec1_pem(&secret_key).context("failed to encode key")?;
    print!("{}", pem.as_str());
    Ok(())
}
