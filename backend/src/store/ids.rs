//! Id generation policies.
//!
//! Generators are always called with the store's write lock held and get a
//! predicate telling them which ids are already in use, so both policies
//! guarantee uniqueness within a store rather than just making collisions
//! unlikely.

use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    type Id;

    fn next_id(&mut self, is_taken: &dyn Fn(&Self::Id) -> bool) -> Self::Id;
}

const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Random fixed-length alphanumeric ids such as `"aZ3k9Q"`.
///
/// Randomness comes from UUID v4 bytes. The version and variant bytes are
/// skipped and bytes past the last multiple of 62 are rejected, which keeps
/// every character equally likely.
#[derive(Debug, Clone)]
pub struct ShortIdGenerator {
    len: usize,
}

impl ShortIdGenerator {
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1) }
    }

    fn random_id(&self) -> String {
        let mut id = String::with_capacity(self.len);
        while id.len() < self.len {
            let uuid = Uuid::new_v4();
            for (idx, byte) in uuid.as_bytes().iter().enumerate() {
                if idx == 6 || idx == 8 || *byte >= 248 {
                    continue;
                }
                id.push(ALPHABET[(*byte % 62) as usize] as char);
                if id.len() == self.len {
                    break;
                }
            }
        }
        id
    }
}

impl Default for ShortIdGenerator {
    fn default() -> Self {
        Self::new(6)
    }
}

impl IdGenerator for ShortIdGenerator {
    type Id = String;

    fn next_id(&mut self, is_taken: &dyn Fn(&String) -> bool) -> String {
        loop {
            let id = self.random_id();
            if !is_taken(&id) {
                return id;
            }
        }
    }
}

/// Epoch-millisecond ids, strictly increasing within a process even when two
/// records are created in the same millisecond or the clock steps back.
#[derive(Debug, Clone)]
pub struct TimestampIdGenerator {
    clock: fn() -> u64,
    last: u64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::with_clock(epoch_millis)
    }

    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self { clock, last: 0 }
    }
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimestampIdGenerator {
    type Id = u64;

    fn next_id(&mut self, is_taken: &dyn Fn(&u64) -> bool) -> u64 {
        let mut id = (self.clock)().max(self.last + 1);
        while is_taken(&id) {
            id += 1;
        }
        self.last = id;
        id
    }
}

fn epoch_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}
