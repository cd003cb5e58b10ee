//! Multiplies a fixed 2x2 pair with the reference kernel and prints the
//! result in the same form as the C reference harness.
//!
//! Run with `cargo run -p gm-tensor --example demo_2x2`.

use gm_tensor::{Matrix, ReferenceBackend};

fn main() -> gm_tensor::Result<()> {
    let _ = env_logger::try_init();

    let a = Matrix::from_i8_rows(&[[1, 2], [3, 4]]);
    let b = Matrix::from_i8_rows(&[[5, 6], [7, 8]]);
    let c = a.matmul(&b, &ReferenceBackend::new())?;

    println!("Result C:");
    print!("{}", c);
    Ok(())
}
