use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let embedded_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("could not create host/static");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("could not copy frontend/dist into host/static (run `trunk build` in frontend/ first)");
    } else if !embedded_dir.exists() {
        // No frontend build yet: embed an empty bundle so the host still compiles.
        fs::create_dir_all(&embedded_dir)
            .expect("could not create the empty host/static/dist bundle; check write access to host/");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
