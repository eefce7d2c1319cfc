use glob::glob;
use std::env;
use std::fs;
use std::path::PathBuf;

fn compile_css() {
    let is_debug = env::var_os("PROFILE") == Some("debug".into());

    let src: &str = "sass/main.scss";
    let dst: &str = "main.css";
    let out_dir: PathBuf = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    for entry in glob("sass/**/*.scss").expect("sass glob pattern is valid").flatten() {
        println!("cargo:rerun-if-changed={}", entry.display());
    }

    /* Compress css in release mode */
    let options = grass::Options::default().style(if is_debug {
        grass::OutputStyle::Expanded
    } else {
        grass::OutputStyle::Compressed
    });

    let css = grass::from_path(src, &options)
        .unwrap_or_else(|err| panic!("could not compile {}: {}", src, err));
    let dst = out_dir.join(dst);
    fs::write(&dst, css).unwrap_or_else(|err| panic!("could not write {}: {}", dst.display(), err));
}

fn main() {
    compile_css();
}
