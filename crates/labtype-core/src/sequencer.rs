//! Question ordering.

use rand::Rng;

use crate::model::Question;

/// Return a uniformly shuffled copy of `corpus` (Fisher–Yates).
///
/// The corpus itself is left untouched.
pub fn shuffle<R: Rng + ?Sized>(corpus: &[Question], rng: &mut R) -> Vec<Question> {
    let mut sequence = corpus.to_vec();
    for i in (1..sequence.len()).rev() {
        let j = rng.gen_range(0..=i);
        sequence.swap(i, j);
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CORPUS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn prompts(questions: &[Question]) -> Vec<&'static str> {
        let mut p: Vec<&'static str> = questions.iter().map(|q| q.prompt).collect();
        p.sort_unstable();
        p
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let sequence = shuffle(&CORPUS, &mut rng);
            assert_eq!(sequence.len(), CORPUS.len());
            assert_eq!(prompts(&sequence), prompts(&CORPUS));
        }
    }

    #[test]
    fn shuffle_leaves_corpus_alone() {
        let before = CORPUS.to_vec();
        let mut rng = StdRng::seed_from_u64(3);
        let _ = shuffle(&CORPUS, &mut rng);
        assert_eq!(CORPUS.to_vec(), before);
    }

    #[test]
    fn same_seed_same_order() {
        let a = shuffle(&CORPUS, &mut StdRng::seed_from_u64(99));
        let b = shuffle(&CORPUS, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_actually_reorders() {
        let mut rng = StdRng::seed_from_u64(5);
        let moved = (0..20).any(|_| shuffle(&CORPUS, &mut rng) != CORPUS.to_vec());
        assert!(moved);
    }

    #[test]
    fn every_position_is_reachable() {
        // first question of the corpus should land in every slot of a
        // short slice given enough draws
        let slice = &CORPUS[..4];
        let mut rng = StdRng::seed_from_u64(1234);
        let mut seen = [0usize; 4];
        for _ in 0..4000 {
            let sequence = shuffle(slice, &mut rng);
            let pos = sequence
                .iter()
                .position(|q| q.prompt == slice[0].prompt)
                .unwrap();
            seen[pos] += 1;
        }
        for count in seen {
            assert!((800..1200).contains(&count), "skewed distribution: {seen:?}");
        }
    }

    #[test]
    fn empty_and_single_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(shuffle(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&CORPUS[..1], &mut rng), CORPUS[..1].to_vec());
    }
}
