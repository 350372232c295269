//! Print an argon2 hash for `ADMIN_PASSWORD_HASH`
//!
//! ```text
//! cargo run -p riad-server --example gen_hash -- 'my password'
//! ```

fn main() {
    let password = std::env::args().nth(1).unwrap_or_else(|| "admin".to_string());
    let hash = riad_server::util::hash_password(&password).expect("Failed to hash password");
    println!("{hash}");
}
