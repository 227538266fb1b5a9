// Best character map selection.
//
// A font may carry several cmap subtables. The one used is the first
// subtable matching the highest-ranked (platform, encoding) pair below:
// full-repertoire Unicode tables before BMP-only ones, Windows before
// Unicode-platform within each class.

use std::collections::BTreeSet;

use ttf_parser::cmap::{Subtable, Subtables};
use ttf_parser::{Face, PlatformId};

use super::sfnt::FontError;

/// (platform, encoding) pairs in order of preference.
pub const CMAP_PREFERENCES: [(PlatformId, u16); 8] = [
    (PlatformId::Windows, 10),
    (PlatformId::Unicode, 6),
    (PlatformId::Unicode, 4),
    (PlatformId::Windows, 1),
    (PlatformId::Unicode, 3),
    (PlatformId::Unicode, 2),
    (PlatformId::Unicode, 1),
    (PlatformId::Unicode, 0),
];

/// Preference rank of a subtable's encoding (lower is better), `None` if the
/// encoding is not a Unicode mapping this tool understands.
pub fn preference_rank(platform: PlatformId, encoding: u16) -> Option<usize> {
    CMAP_PREFERENCES
        .iter()
        .position(|&(p, e)| p == platform && e == encoding)
}

fn best_subtable<'a, I>(subtables: I) -> Option<Subtable<'a>>
where
    I: IntoIterator<Item = Subtable<'a>>,
{
    subtables
        .into_iter()
        .filter_map(|st| preference_rank(st.platform_id, st.encoding_id).map(|rank| (rank, st)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, st)| st)
}

/// Every subtable ttf-parser can decode. The `Subtables` iterator stops at
/// the first record it cannot decode, so records are visited by index.
fn decodable_subtables<'a>(subtables: Subtables<'a>) -> impl Iterator<Item = Subtable<'a>> {
    (0..subtables.len()).filter_map(move |i| {
        let st = subtables.get(i);
        if st.is_none() {
            log::debug!("skipping undecodable cmap subtable {i}");
        }
        st
    })
}

/// Code points mapped by the font's best cmap subtable.
///
/// A font without a cmap, or without any Unicode subtable, maps nothing.
pub fn best_character_map(data: &[u8]) -> Result<BTreeSet<u32>, FontError> {
    let face = Face::parse(data, 0).map_err(|e| FontError::Parse(e.to_string()))?;
    let mut codepoints = BTreeSet::new();

    let Some(cmap) = face.tables().cmap else {
        log::debug!("font has no cmap table");
        return Ok(codepoints);
    };
    let Some(subtable) = best_subtable(decodable_subtables(cmap.subtables)) else {
        log::debug!("cmap has no Unicode subtable");
        return Ok(codepoints);
    };

    log::debug!(
        "using cmap subtable platform {:?} encoding {}",
        subtable.platform_id,
        subtable.encoding_id
    );
    subtable.codepoints(|cp| {
        codepoints.insert(cp);
    });
    Ok(codepoints)
}
