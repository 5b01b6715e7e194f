use std::{env, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let repo_proto = manifest_dir.join("proto").join("caffe.proto");

    println!("cargo:rerun-if-changed={}", repo_proto.display());

    prost_build::Config::new()
        .bytes(["."])
        .out_dir(&out_dir)
        .compile_protos(&[&repo_proto], &[manifest_dir.join("proto")])?;

    Ok(())
}
