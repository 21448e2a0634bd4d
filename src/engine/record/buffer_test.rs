use crate::engine::record::buffer::{RecordBuf, SCRATCH_CAPACITY, ScratchPool};

#[test]
fn shared_slots_within_capacity() {
    let mut pool = ScratchPool::new(true);
    let (read, out) = pool.acquire(100, SCRATCH_CAPACITY);
    assert!(read.is_shared());
    assert!(out.is_shared());
    assert_eq!(read.as_slice().len(), 100);
    assert_eq!(out.as_slice().len(), SCRATCH_CAPACITY);
}

#[test]
fn fresh_slot_one_past_capacity() {
    let mut pool = ScratchPool::new(true);
    let (read, out) = pool.acquire(SCRATCH_CAPACITY + 1, 10);
    assert!(!read.is_shared());
    assert_eq!(read.as_slice().len(), SCRATCH_CAPACITY + 1);
    assert!(out.is_shared());
}

#[test]
fn reuse_disabled_always_allocates() {
    let mut pool = ScratchPool::new(false);
    assert!(!pool.reuse_enabled());
    let (read, out) = pool.acquire(1, 1);
    assert!(!read.is_shared());
    assert!(!out.is_shared());
}

#[test]
fn shared_slot_is_reset_between_acquisitions() {
    let mut pool = ScratchPool::new(true);
    {
        let (_, mut out) = pool.acquire(0, 64);
        for b in out.as_mut_slice() {
            *b = 0xFF;
        }
    }
    let (_, out) = pool.acquire(0, 128);
    assert_eq!(out.as_slice().len(), 128);
    assert!(out.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn reuse_can_be_toggled() {
    let mut pool = ScratchPool::new(true);
    pool.set_reuse(false);
    let (read, _) = pool.acquire(1, 1);
    assert!(!read.is_shared());
}

#[test]
fn record_buf_deref_and_into_vec() {
    let owned = RecordBuf::Owned(vec![1, 2, 3]);
    assert!(!owned.is_pooled());
    assert_eq!(owned.len(), 3);
    assert_eq!(&owned[..], &[1, 2, 3]);
    assert_eq!(owned.into_vec(), vec![1, 2, 3]);

    let bytes = [9u8, 8];
    let pooled = RecordBuf::Pooled(&bytes);
    assert!(pooled.is_pooled());
    assert!(!pooled.is_empty());
    assert_eq!(pooled.into_vec(), vec![9, 8]);
}
