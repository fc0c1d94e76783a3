fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    println!("cargo:rerun-if-env-changed=WIGELL_WEB_GIT_SHA");

    built::write_built_file().expect("Failed to acquire build-time information");
}
