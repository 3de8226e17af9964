use crate::DocId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f32,
}

/// Descending score, then ascending doc id.
fn by_score(a: &ScoredDoc, b: &ScoredDoc) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.doc_id.cmp(&b.doc_id))
}

/// Keep the `k` best items under `cmp`, sorted. `k` is clamped to `items.len()`.
///
/// `cmp` must be a total order for the result to be deterministic.
pub fn select_top<T, F>(mut items: Vec<T>, k: usize, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let k = k.min(items.len());
    if k == 0 {
        return Vec::new();
    }
    if k < items.len() {
        items.select_nth_unstable_by(k - 1, &mut cmp);
        items.truncate(k);
    }
    items.sort_by(cmp);
    items
}

/// Top `k` documents of a sparse score map.
pub fn top_k<I>(scores: I, k: usize) -> Vec<ScoredDoc>
where
    I: IntoIterator<Item = (DocId, f32)>,
{
    let scored = scores.into_iter().map(|(doc_id, score)| ScoredDoc { doc_id, score }).collect();
    select_top(scored, k, by_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_on_doc_id() {
        let ranked = top_k([(4, 0.5), (2, 0.9), (1, 0.5), (3, 0.1)], 3);
        let ids: Vec<DocId> = ranked.iter().map(|s| s.doc_id).collect();
        assert_eq!(ids, vec![2, 1, 4]);
    }

    #[test]
    fn k_is_clamped() {
        assert_eq!(top_k([(0, 1.0), (1, 2.0)], 10).len(), 2);
        assert!(top_k([(0, 1.0)], 0).is_empty());
        assert!(top_k(std::iter::empty::<(DocId, f32)>(), 5).is_empty());
    }

    #[test]
    fn selection_matches_full_sort() {
        let scores: Vec<(DocId, f32)> = (0..50).map(|i| (i, ((i * 37) % 11) as f32)).collect();
        let mut full = top_k(scores.clone(), scores.len());
        full.truncate(7);
        assert_eq!(top_k(scores, 7), full);
    }
}
