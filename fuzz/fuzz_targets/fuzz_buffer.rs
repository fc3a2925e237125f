#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seekbuf::SeekableBuffer;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(Vec<u8>),
    Read(u16),
    Seek(i16),
    Peek { len: u8, forward_offset: u16 },
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    backward_capacity: u16,
    forward_capacity: u16,
    ops: Vec<Op>,
}

/// Every byte ever appended since the last clear, plus the cursor offset.
#[derive(Default)]
struct Model {
    data: Vec<u8>,
    position: usize,
}

fn run(input: Input) {
    let mut buffer = SeekableBuffer::new(
        usize::from(input.backward_capacity),
        usize::from(input.forward_capacity),
    );
    let mut model = Model::default();

    for op in input.ops {
        match op {
            Op::Append(bytes) => {
                let expected =
                    buffer.forward_bytes() + bytes.len() < usize::from(input.forward_capacity);
                assert_eq!(buffer.append(&bytes), expected);
                model.data.extend_from_slice(&bytes);
            }
            Op::Read(n) => {
                let mut out = vec![0u8; usize::from(n)];
                let got = buffer.read(&mut out);
                let available = model.data.len() - model.position;
                assert_eq!(got, usize::from(n).min(available));
                assert_eq!(out[..got], model.data[model.position..model.position + got]);
                model.position += got;
            }
            Op::Seek(k) => {
                let k = isize::from(k);
                let allowed = if k >= 0 {
                    k.unsigned_abs() <= buffer.forward_bytes()
                } else {
                    k.unsigned_abs() <= buffer.backward_bytes()
                };
                assert_eq!(buffer.seek(k), allowed);
                if allowed {
                    model.position = model.position.checked_add_signed(k).unwrap();
                }
            }
            Op::Peek {
                len,
                forward_offset,
            } => {
                let mut out = vec![0u8; usize::from(len)];
                let got = buffer.peek(&mut out, usize::from(forward_offset));
                let from = (model.position + usize::from(forward_offset)).min(model.data.len());
                assert_eq!(got, usize::from(len).min(model.data.len() - from));
                assert_eq!(out[..got], model.data[from..from + got]);
            }
            Op::Clear => {
                buffer.clear();
                model = Model::default();
            }
        }

        assert_eq!(buffer.position(), model.position as u64);
        assert_eq!(buffer.forward_bytes(), model.data.len() - model.position);
        assert_eq!(buffer.end_position(), model.data.len() as u64);
        assert!(buffer.start_position() <= buffer.position());
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Input::arbitrary(&mut arbitrary::Unstructured::new(data)) {
        run(input);
    }
});
