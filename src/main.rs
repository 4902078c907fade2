use anyhow::{bail, Result};
use symaffine::{affine_matrix, symbols, DisplayConfig};
use tracing::Level;

fn main() -> Result<()> {
    // stdout carries only the two matrices.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let s = symbols("a b c d e f")?;
    let [a, b, c, d, e, f] = s.as_slice() else {
        bail!("expected six symbols, got {}", s.len());
    };

    let matrix = affine_matrix(a.clone(), b.clone(), c.clone(), d.clone(), e.clone(), f.clone());
    let inverse = matrix.inverse()?;

    let config = DisplayConfig::default();
    println!("{}", matrix.render(&config));
    println!("{}", inverse.render(&config));
    Ok(())
}
