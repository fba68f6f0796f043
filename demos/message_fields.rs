//! Builds the same record shape twice, once inside an arena and once on the
//! heap, through the identical field surface.

use core::fmt::Write;
use core::mem::MaybeUninit;

use corda::{Arena, FieldString};

struct LogRecord<'a> {
    host: FieldString<'a>,
    unit: FieldString<'a>,
    message: FieldString<'a>,
}

impl<'a> LogRecord<'a> {
    fn new_in(arena: Option<&'a Arena<'a>>) -> Self {
        LogRecord {
            host: FieldString::new_in(arena),
            unit: FieldString::new_in(arena),
            message: FieldString::new_in(arena),
        }
    }
}

fn fill(record: &mut LogRecord<'_>, sequence: u64) {
    record.host.assign(b"db-17.rack-4");
    record.unit.assign(b"ingest");
    write!(
        record.message,
        "sequence {} accepted after {} retries",
        sequence,
        sequence % 3
    )
    .unwrap();
}

fn main() {
    let mut backing_region = [MaybeUninit::uninit(); 64 * 1024];
    let arena = Arena::from_buffer(&mut backing_region[..]);

    let mut on_arena = LogRecord::new_in(Some(&arena));
    fill(&mut on_arena, 10086);

    let mut on_heap = LogRecord::new_in(None);
    fill(&mut on_heap, 10086);

    assert_eq!(on_arena.host, on_heap.host);
    assert_eq!(on_arena.unit, on_heap.unit);
    assert_eq!(on_arena.message, on_heap.message);
    assert!(arena.contains(on_arena.message.as_ptr()));

    println!("message:      {}", on_arena.message.to_str().unwrap());
    println!("arena bytes:  {}", arena.allocated_bytes());
    println!(
        "heap record:  {:?} / {:?} / {:?}",
        on_heap.host, on_heap.unit, on_heap.message
    );
}
