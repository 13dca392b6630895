//! Shared test helpers for codec tests.

#![allow(dead_code)]

use bullhorn_model::{BullhornEntity, EntityId};
use serde::{Deserialize, Serialize, Serializer};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Entity whose serialization always fails.
#[derive(Debug, Default, Deserialize)]
pub struct FaultyEntity {
    pub id: Option<EntityId>,
}

impl Serialize for FaultyEntity {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(<S::Error as serde::ser::Error>::custom("refusing to serialize"))
    }
}

impl BullhornEntity for FaultyEntity {
    const ENTITY_NAME: &'static str = "Faulty";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

/// Reader that yields `prefix` and then fails.
pub struct FailingReader {
    prefix: Option<Vec<u8>>,
}

impl FailingReader {
    pub fn new(prefix: &str) -> Self {
        Self { prefix: Some(prefix.as_bytes().to_vec()) }
    }
}

impl io::Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.prefix.take() {
            Some(bytes) => {
                buf[..bytes.len()].copy_from_slice(&bytes);
                Ok(bytes.len())
            }
            None => Err(io::Error::other("connection reset")),
        }
    }
}

/// In-memory sink for formatted `tracing` output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a DEBUG-level subscriber that writes into the returned buffer.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
