//! CSV export of a played game.

use prompt_arena::{
    render_csv, Challenge, ChallengeStore, GameConfig, GameEngine, ScriptedGenerator,
};

#[test]
fn test_export_played_game() {
    let store = ChallengeStore::new(vec![
        Challenge::new("write a greeting", "hello world"),
        Challenge::new("count to three", "one two three"),
        Challenge::new("name a color", "blue"),
    ])
    .unwrap();
    let mut engine = GameEngine::new(
        store,
        ScriptedGenerator::new(["hello world", "one two", "blue"]),
        GameConfig::with_rounds(3),
    );
    let mut session = engine.new_session("ada").unwrap();

    for prompt in ["hi", "count", "color"] {
        engine.submit_prompt(&mut session, prompt).unwrap();
        engine.advance_round(&mut session).unwrap();
    }

    let csv = render_csv(session.results());
    let lines: Vec<&str> = csv.lines().collect();

    // Header plus one row per round, no trailing empty row.
    assert_eq!(lines.len(), 4);
    assert!(!csv.ends_with('\n'));
    assert_eq!(
        lines[0],
        "round,player,prompt,output,target,match_score,token_penalty,final_score"
    );
    assert!(lines[1].starts_with("1,ada,hi,hello world,hello world,100,"));
    assert!(lines[2].starts_with("2,ada,count,"));
    assert!(lines[3].starts_with("3,ada,color,blue,blue,100,"));
}

#[test]
fn test_export_quotes_free_text_fields() {
    let store = ChallengeStore::new(vec![Challenge::new("t", "hello world")]).unwrap();
    let mut engine = GameEngine::new(
        store,
        ScriptedGenerator::new(["sure, here you go"]),
        GameConfig::with_rounds(1),
    );
    let mut session = engine.new_session("ada").unwrap();
    engine.submit_prompt(&mut session, "greet me, please").unwrap();

    let csv = render_csv(session.results());
    assert!(csv.contains("\"greet me, please\""));
    assert!(csv.contains("\"sure, here you go\""));
    // Still one header and one row.
    assert_eq!(csv.lines().count(), 2);
}
