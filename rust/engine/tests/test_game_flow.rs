use pig_engine::dice::ScriptedDie;
use pig_engine::engine::{GameOutcome, RoundEngine, ScriptedDecisions, TurnOutcome};
use pig_engine::events::GameEvent;

fn alice_and_bob(faces: Vec<u8>) -> RoundEngine<ScriptedDie> {
    RoundEngine::new(["Alice", "Bob"], 100, ScriptedDie::new(faces).unwrap()).unwrap()
}

/// Play one turn for the current player and expect it to end in a hold.
fn bank(engine: &mut RoundEngine<ScriptedDie>, answers: &mut ScriptedDecisions) {
    let outcome = engine.play_turn(answers, &mut ());
    assert!(matches!(outcome, TurnOutcome::Held { .. }), "{:?}", outcome);
}

#[test]
fn alice_at_95_wins_on_second_roll_without_prompt() {
    // Fifteen sixes and a five give Alice 95 over one long turn, then Bob busts.
    let mut faces = vec![6; 15];
    faces.push(5);
    faces.push(1);
    faces.extend([3, 2]);
    let mut eng = alice_and_bob(faces);

    let mut setup = ScriptedDecisions::new(vec!["r"; 15].into_iter().chain(["h"]));
    bank(&mut eng, &mut setup);
    assert_eq!(eng.players()[0].score(), 95);
    eng.switch_player();
    assert_eq!(eng.play_turn(&mut setup, &mut ()), TurnOutcome::Bust { discarded: 0 });
    eng.switch_player();

    let mut answers = ScriptedDecisions::new(["r"]);
    let mut events: Vec<GameEvent> = Vec::new();
    let outcome = eng.play_turn(&mut answers, &mut events);

    assert_eq!(outcome, TurnOutcome::Won { banked: 5 });
    assert_eq!(eng.players()[0].score(), 100);
    // One prompt after the 3, none after the 2.
    assert_eq!(answers.times_asked(), 1);
    assert!(matches!(
        events.last(),
        Some(GameEvent::Won { player, score: 100 }) if player == "Alice"
    ));
}

#[test]
fn bob_busts_after_four() {
    let mut eng = alice_and_bob(vec![4, 1]);
    eng.switch_player();
    let mut answers = ScriptedDecisions::new(["roll"]);
    let outcome = eng.play_turn(&mut answers, &mut ());
    assert_eq!(outcome, TurnOutcome::Bust { discarded: 4 });
    assert_eq!(eng.players()[1].score(), 0);
}

#[test]
fn alice_holds_five_then_bob_is_up() {
    let mut eng = alice_and_bob(vec![5]);
    let mut answers = ScriptedDecisions::new(["hold"]);
    let outcome = eng.play_turn(&mut answers, &mut ());
    assert_eq!(outcome, TurnOutcome::Held { banked: 5 });
    assert_eq!(eng.players()[0].score(), 5);
    eng.switch_player();
    assert_eq!(eng.current_player().name(), "Bob");
}

#[test]
fn bust_keeps_previously_banked_score() {
    let mut eng = alice_and_bob(vec![6, 1, 2, 3, 1]);
    let mut answers = ScriptedDecisions::new(["h", "r", "r"]);
    bank(&mut eng, &mut answers);
    eng.switch_player();
    eng.play_turn(&mut answers, &mut ());
    eng.switch_player();

    let before = eng.players()[0].score();
    let outcome = eng.play_turn(&mut answers, &mut ());
    assert_eq!(outcome, TurnOutcome::Bust { discarded: 5 });
    assert_eq!(eng.players()[0].score(), before);
}

#[test]
fn turn_events_follow_roll_order() {
    let mut eng = alice_and_bob(vec![2, 4]);
    let mut answers = ScriptedDecisions::new(["R", "h"]);
    let mut events: Vec<GameEvent> = Vec::new();
    eng.play_turn(&mut answers, &mut events);

    assert_eq!(
        events,
        vec![
            GameEvent::TurnStarted {
                player: "Alice".into(),
                score: 0
            },
            GameEvent::Rolled {
                player: "Alice".into(),
                face: 2,
                turn_total: 2,
                potential: 2
            },
            GameEvent::Rolled {
                player: "Alice".into(),
                face: 4,
                turn_total: 6,
                potential: 6
            },
            GameEvent::Held {
                player: "Alice".into(),
                banked: 6,
                score: 6
            },
        ]
    );
}

#[test]
fn full_game_three_players_rotates_and_finishes() {
    // Every turn: roll 6, hold. Each hold banks 6, so the first player needs
    // 17 turns; the others get 16 each in between.
    let mut eng = RoundEngine::new(
        ["Ann", "Ben", "Cat"],
        100,
        ScriptedDie::new(vec![6]).unwrap(),
    )
    .unwrap();
    let mut answers = ScriptedDecisions::new(vec!["hold"; 64]);
    let mut events: Vec<GameEvent> = Vec::new();
    let outcome = eng.play(&mut answers, &mut events);

    // Ann: 16 holds reach 96, then on turn 17 the first 6 gives 102 mid-turn.
    assert_eq!(
        outcome,
        GameOutcome::Won {
            winner: 0,
            name: "Ann".into(),
            score: 102,
            turns: 49,
        }
    );
    assert_eq!(eng.players()[1].score(), 96);
    assert_eq!(eng.players()[2].score(), 96);
    assert!(matches!(events.first(), Some(GameEvent::GameStarted { target: 100, .. })));
    assert!(matches!(events.last(), Some(GameEvent::Scoreboard { .. })));
}

#[test]
fn running_out_of_answers_abandons_game() {
    let mut eng = alice_and_bob(vec![3]);
    let mut answers = ScriptedDecisions::new(["h"]);
    let outcome = eng.play(&mut answers, &mut ());
    assert_eq!(outcome, GameOutcome::Abandoned { turns: 2 });
    assert_eq!(eng.players()[0].score(), 3);
    assert_eq!(eng.players()[1].score(), 0);
}

#[test]
fn custom_threshold_is_respected() {
    let mut eng = RoundEngine::new(["A", "B"], 10, ScriptedDie::new(vec![5]).unwrap()).unwrap();
    let mut answers = ScriptedDecisions::new(["r"]);
    let outcome = eng.play(&mut answers, &mut ());
    assert!(matches!(outcome, GameOutcome::Won { winner: 0, score: 10, turns: 1, .. }));
}
