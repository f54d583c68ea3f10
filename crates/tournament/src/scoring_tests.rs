use super::*;

fn table() -> ResultsTable {
    ResultsTable::new(["left", "right"])
}

#[test]
fn win_awards_two_points_to_the_winner() {
    let mut table = table();
    apply_result(&mut table, "left", "right", &MatchResult::new(7, 3)).unwrap();

    let left = table.get("left").unwrap();
    let right = table.get("right").unwrap();
    assert_eq!((left.points, left.episodes_sum), (WIN_POINTS, 7));
    assert_eq!((right.points, right.episodes_sum), (0, 3));
}

#[test]
fn loss_awards_two_points_to_the_right() {
    let mut table = table();
    apply_result(&mut table, "left", "right", &MatchResult::new(0, 10)).unwrap();

    assert_eq!(table.get("left").unwrap().points, 0);
    assert_eq!(table.get("right").unwrap().points, 2);
    assert_eq!(table.get("right").unwrap().episodes_sum, 10);
}

#[test]
fn draw_awards_one_point_each() {
    let mut table = table();
    apply_result(&mut table, "left", "right", &MatchResult::new(5, 5)).unwrap();

    for name in ["left", "right"] {
        let standing = table.get(name).unwrap();
        assert_eq!(standing.points, DRAW_POINTS);
        assert_eq!(standing.episodes_sum, 5);
    }
}

#[test]
fn totals_accumulate_across_matches() {
    let mut table = table();
    apply_result(&mut table, "left", "right", &MatchResult::new(7, 3)).unwrap();
    apply_result(&mut table, "left", "right", &MatchResult::new(2, 2)).unwrap();
    apply_result(&mut table, "right", "left", &MatchResult::new(4, 1)).unwrap();

    let left = table.get("left").unwrap();
    let right = table.get("right").unwrap();
    assert_eq!((left.points, left.episodes_sum), (3, 10));
    assert_eq!((right.points, right.episodes_sum), (3, 9));
}

#[test]
fn unknown_agent_leaves_table_untouched() {
    let mut table = table();
    let err = apply_result(&mut table, "left", "ghost", &MatchResult::new(9, 0)).unwrap_err();

    assert!(matches!(err, TournamentError::UnknownAgent(name) if name == "ghost"));
    assert_eq!(table, self::table());
}
