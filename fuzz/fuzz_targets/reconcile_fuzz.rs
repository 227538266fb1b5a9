#![no_main]
use libfuzzer_sys::fuzz_target;
use unicoderange::reconcile::{ReconcileResult, reconcile};

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let (head, rest) = data.split_at(16);
    let stored: [u32; 4] =
        std::array::from_fn(|k| u32::from_le_bytes(head[4 * k..4 * k + 4].try_into().unwrap()));
    let cps: Vec<u32> = rest
        .chunks_exact(3)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], 0]))
        .collect();

    let next = match reconcile(cps.iter().copied(), stored) {
        ReconcileResult::Unchanged => stored,
        ReconcileResult::Changed { new_words, .. } => new_words,
    };
    assert_eq!(reconcile(cps.iter().copied(), next), ReconcileResult::Unchanged);
});
