use std::fs;
use std::path::Path;

// Embeds the SPA: a fresh `trunk build` in ../frontend replaces static/dist.
// Without one, the checked-in placeholder page is served.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.join("index.html").exists() {
        let _ = fs::remove_dir_all(out_dir.join("dist"));
        fs::create_dir_all(out_dir).expect("create static/");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .expect("copy frontend/dist into static/");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
