//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Cryptographic utilities (HMAC-SHA256 signing, Base64, random bytes)
//! - Password hashing (Argon2id with tunable cost)
//! - Cookie building and parsing

pub mod cookie;
pub mod crypto;
pub mod password;
