#![no_main]
use libfuzzer_sys::fuzz_target;
use unicoderange::font::{FontStore, SfntFont};
use unicoderange::io::reconcile_font;
use unicoderange::reconcile::ReconcileResult;

fuzz_target!(|data: &[u8]| {
    let Ok(mut font) = SfntFont::from_bytes(data.to_vec()) else {
        return;
    };
    let len = font.as_bytes().len();
    if let Ok((ReconcileResult::Changed { new_words, .. }, _)) = reconcile_font(&mut font) {
        assert_eq!(font.as_bytes().len(), len);
        assert_eq!(font.stored_range_words().unwrap(), new_words);
    }
});
