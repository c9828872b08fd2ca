//! Anti-forgery tokens for the search endpoint.
//!
//! A nonce is a keyed BLAKE3 hash of the action name and the current tick. One tick is half of the
//! configured lifetime, and a nonce is accepted during its own tick and the one after it, so a
//! freshly issued nonce stays valid for between half and the whole lifetime.

use time::OffsetDateTime;

const KEY_CONTEXT: &str = "plps 2024 search nonce key";
const NONCE_HEX_LEN: usize = 20;

pub trait NonceVerifier
where
	Self: Send + Sync,
{
	fn verify(&self, action: &str, nonce: &str) -> bool;
}

pub struct Blake3Nonces {
	key: [u8; 32],
	tick_secs: i64,
}
impl Blake3Nonces {
	pub fn new(secret: &str, lifetime_secs: u64) -> Self {
		let tick_secs = i64::try_from(lifetime_secs / 2).unwrap_or(i64::MAX).max(1);

		Self { key: blake3::derive_key(KEY_CONTEXT, secret.as_bytes()), tick_secs }
	}

	pub fn create(&self, action: &str) -> String {
		self.create_at(action, OffsetDateTime::now_utc().unix_timestamp())
	}

	pub fn create_at(&self, action: &str, unix_secs: i64) -> String {
		self.token(action, self.tick(unix_secs))
	}

	pub fn verify_at(&self, action: &str, nonce: &str, unix_secs: i64) -> bool {
		let tick = self.tick(unix_secs);

		[tick, tick - 1].into_iter().any(|candidate| ct_eq(&self.token(action, candidate), nonce))
	}

	fn tick(&self, unix_secs: i64) -> i64 {
		unix_secs.div_euclid(self.tick_secs) + 1
	}

	fn token(&self, action: &str, tick: i64) -> String {
		let mut hasher = blake3::Hasher::new_keyed(&self.key);

		hasher.update(&tick.to_le_bytes());
		hasher.update(action.as_bytes());

		let mut hex = hasher.finalize().to_hex().to_string();

		hex.truncate(NONCE_HEX_LEN);

		hex
	}
}
impl NonceVerifier for Blake3Nonces {
	fn verify(&self, action: &str, nonce: &str) -> bool {
		self.verify_at(action, nonce, OffsetDateTime::now_utc().unix_timestamp())
	}
}

fn ct_eq(expected: &str, given: &str) -> bool {
	if expected.len() != given.len() {
		return false;
	}

	expected.bytes().zip(given.bytes()).fold(0_u8, |acc, (a, b)| acc | (a ^ b)) == 0
}
