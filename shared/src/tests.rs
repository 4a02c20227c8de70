#[cfg(test)]
mod tests {
    use crate::{cast_vote, parse_vote_index, rank_by_votes, seed_cats, validate_cats, Cat, VoteError};

    fn listing(entries: &[(&str, u64)]) -> Vec<Cat> {
        entries
            .iter()
            .map(|(name, votes)| Cat::new(*name, "").with_votes(*votes))
            .collect()
    }

    fn counts(cats: &[Cat]) -> Vec<(&str, u64)> {
        cats.iter().map(|c| (c.name(), c.votes())).collect()
    }

    #[test]
    fn test_index_parsing() {
        assert_eq!(parse_vote_index("0", 2), Ok(0));
        assert_eq!(parse_vote_index("1", 2), Ok(1));
        assert_eq!(parse_vote_index("+1", 2), Ok(1));

        assert!(matches!(parse_vote_index("abc", 2), Err(VoteError::InvalidIndex(_))));
        assert!(matches!(parse_vote_index("", 2), Err(VoteError::InvalidIndex(_))));
        assert!(matches!(parse_vote_index(" 1", 2), Err(VoteError::InvalidIndex(_))));
        assert!(matches!(parse_vote_index("1.5", 2), Err(VoteError::InvalidIndex(_))));

        assert_eq!(
            parse_vote_index("2", 2),
            Err(VoteError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            parse_vote_index("-1", 2),
            Err(VoteError::IndexOutOfRange { index: -1, len: 2 })
        );
        assert!(parse_vote_index("0", 0).is_err());
    }

    #[test]
    fn test_vote_increments_only_target() {
        let mut cats = listing(&[("Susanna", 0), ("Walter", 0), ("Busby", 3)]);

        let receipt = cast_vote(&mut cats, "0", false).unwrap();
        assert_eq!(receipt.name, "Susanna");
        assert_eq!(receipt.votes, 1);

        cast_vote(&mut cats, "0", false).unwrap();
        assert_eq!(counts(&cats), vec![("Susanna", 2), ("Walter", 0), ("Busby", 3)]);
    }

    #[test]
    fn test_rejected_vote_leaves_listing_alone() {
        let mut cats = listing(&[("A", 1), ("B", 2)]);
        let before = cats.clone();

        assert!(cast_vote(&mut cats, "x", true).is_err());
        assert!(cast_vote(&mut cats, "2", true).is_err());
        assert!(cast_vote(&mut cats, "-1", true).is_err());
        assert_eq!(cats, before);
    }

    #[test]
    fn test_sorting_after_vote() {
        let mut cats = listing(&[("A", 5), ("B", 5)]);
        let receipt = cast_vote(&mut cats, "1", true).unwrap();
        assert_eq!(receipt.index, 1);
        assert_eq!(counts(&cats), vec![("B", 6), ("A", 5)]);

        let mut cats = listing(&[("A", 0), ("B", 5)]);
        for _ in 0..6 {
            cast_vote(&mut cats, "0", false).unwrap();
        }
        rank_by_votes(&mut cats);
        assert_eq!(counts(&cats), vec![("A", 6), ("B", 5)]);
    }

    #[test]
    fn test_ranking_is_stable() {
        let mut cats = listing(&[("A", 1), ("B", 3), ("C", 1), ("D", 3), ("E", 0)]);
        rank_by_votes(&mut cats);
        assert_eq!(
            counts(&cats),
            vec![("B", 3), ("D", 3), ("A", 1), ("C", 1), ("E", 0)]
        );
    }

    #[test]
    fn test_seed_and_validation() {
        let seed = seed_cats();
        assert_eq!(seed.len(), 5);
        assert_eq!(seed[0].name(), "Susanna");
        assert!(seed.iter().all(|c| c.votes() == 0 && c.image_url().is_empty()));
        assert!(validate_cats(&seed).is_ok());

        let broken = listing(&[("A", 0), ("  ", 0)]);
        assert_eq!(validate_cats(&broken), Err(VoteError::EmptyName(1)));
    }

    #[test]
    fn test_json_shape() {
        let cat = Cat::new("Walter", "walter.png").with_votes(4);
        let value = serde_json::to_value(&cat).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "Name": "Walter", "ImageURL": "walter.png", "Votes": 4 })
        );

        let sparse: Cat = serde_json::from_str(r#"{"Name":"Keaton"}"#).unwrap();
        assert_eq!(sparse, Cat::new("Keaton", ""));

        assert!(serde_json::from_str::<Cat>(r#"{"Name":"Keaton","Votes":-1}"#).is_err());
    }
}
