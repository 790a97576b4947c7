use clap_complete::generate_to;
use clap_complete::shells::{Bash, Fish, Zsh};
use std::env;
use std::io::Error;

include!("src/cli.rs");

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let Some(outdir) = env::var_os("OUT_DIR") else {
        return Ok(());
    };

    let mut cmd = build_cli();
    for path in [
        generate_to(Bash, &mut cmd, "wikidown", &outdir)?,
        generate_to(Zsh, &mut cmd, "wikidown", &outdir)?,
        generate_to(Fish, &mut cmd, "wikidown", &outdir)?,
    ] {
        println!("cargo:warning=completion script written to {}", path.display());
    }

    Ok(())
}
