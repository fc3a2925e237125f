//! Stages a byte stream that arrives in irregular pieces and consumes it the
//! way a demuxer would: sniff a header, rewind, skip an uninteresting region
//! and drain the rest, pausing the producer whenever the buffer reports that
//! enough data is staged ahead.
//!
//! The stream layout is a toy container:
//!
//! ```text
//! "SBUF" | u32 LE metadata length | metadata | body
//! ```
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=seekbuf=trace cargo run -p seekbuf --example staged_stream
//! ```

use std::collections::VecDeque;

use seekbuf::{BufferOptions, SeekableBuffer, split_into_chunks};

const MAGIC: &[u8; 4] = b"SBUF";

/// Stand-in for a network connection: hands out pre-split pieces.
struct Transport<'a> {
    pieces: VecDeque<&'a [u8]>,
}

impl<'a> Transport<'a> {
    fn new(stream: &'a [u8], parts: usize) -> Self {
        Self {
            pieces: split_into_chunks(stream, parts).into(),
        }
    }

    fn is_done(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Append until the buffer asks us to stop or we run out of data.
    fn pump(&mut self, buffer: &mut SeekableBuffer) {
        while let Some(piece) = self.pieces.pop_front() {
            if !buffer.append(piece) {
                log::info!(
                    "producer paused with {} bytes staged ahead",
                    buffer.forward_bytes()
                );
                break;
            }
        }
    }
}

fn build_stream() -> Vec<u8> {
    let metadata = b"title=demo;codec=none;".repeat(20);
    let body: Vec<u8> = (0..4096u32).map(|i| (i % 26) as u8 + b'a').collect();

    let mut stream = Vec::new();
    stream.extend_from_slice(MAGIC);
    stream.extend_from_slice(&u32::try_from(metadata.len()).unwrap().to_le_bytes());
    stream.extend_from_slice(&metadata);
    stream.extend_from_slice(&body);
    stream
}

fn main() {
    env_logger::init();

    let stream = build_stream();
    let mut transport = Transport::new(&stream, 37);
    let mut buffer = SeekableBuffer::with_options(BufferOptions {
        backward_capacity: 256,
        forward_capacity: 1024,
    });

    // Wait until the fixed header is staged.
    while buffer.forward_bytes() < 8 && !transport.is_done() {
        transport.pump(&mut buffer);
    }

    let mut magic = [0u8; 4];
    if buffer.peek(&mut magic, 0) != 4 || &magic != MAGIC {
        eprintln!("not an SBUF stream");
        return;
    }

    let mut header = [0u8; 8];
    buffer.read(&mut header);
    let metadata_len = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;
    println!("header: metadata is {metadata_len} bytes");

    // A second probe wants the raw header again.
    assert!(buffer.seek(-8));
    let mut again = [0u8; 8];
    buffer.read(&mut again);
    assert_eq!(header, again);

    // Skip the metadata; it may not all be staged yet.
    let mut to_skip = metadata_len;
    while to_skip > 0 {
        let step = to_skip.min(buffer.forward_bytes());
        let offset = isize::try_from(step).unwrap();
        assert!(buffer.seek(offset));
        to_skip -= step;
        if to_skip > 0 {
            if transport.is_done() {
                eprintln!("stream ended inside the metadata");
                return;
            }
            transport.pump(&mut buffer);
        }
    }
    println!("skipped metadata, body starts at {}", buffer.position());

    let mut body = Vec::new();
    let mut out = [0u8; 300];
    loop {
        let n = buffer.read(&mut out);
        body.extend_from_slice(&out[..n]);
        if n == 0 {
            if transport.is_done() {
                break;
            }
            transport.pump(&mut buffer);
        }
    }

    println!(
        "read {} body bytes; {} bytes still rewindable, {} evicted",
        body.len(),
        buffer.backward_bytes(),
        buffer.start_position()
    );
}
