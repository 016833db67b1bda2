#![forbid(unsafe_code)]

/// Monotonic id generator.
///
/// Ids look like creation-time milliseconds, but two creations within the
/// same millisecond still get distinct values: the generator never re-issues
/// or goes backwards, it bumps past the last value instead.
#[derive(Debug, Default)]
pub struct IdGen {
    last: i64,
}

impl IdGen {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Generator that will never collide with ids already present in a
    /// loaded record.
    pub fn seeded(last: i64) -> Self {
        Self { last }
    }

    pub fn next(&mut self) -> i64 {
        let now = now_ms();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }

    pub fn inspection_id(&mut self) -> String {
        format!("insp_{}", self.next())
    }
}

fn now_ms() -> i64 {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    now.as_millis() as i64
}
