use streamables_solver::{SIGNATURE_VERSION, Solver, SolverError};

// ── Construction ─────────────────────────────────────────────────

#[test]
fn empty_secret_rejected() {
    let err = Solver::new("").unwrap_err();
    assert!(matches!(err, SolverError::MissingSecret));
}

#[test]
fn missing_secret_message() {
    assert_eq!(SolverError::MissingSecret.to_string(), "METHOD_NOT_FOUND");
}

#[test]
fn unset_env_var_is_missing_secret() {
    let err = Solver::from_env_var("STREAMABLES_SOLVER_TEST_UNSET_VAR").unwrap_err();
    assert!(matches!(err, SolverError::MissingSecret));
}

#[test]
fn env_var_secret_matches_direct_secret() {
    let name = "STREAMABLES_SOLVER_TEST_SECRET";
    // SAFETY: the variable name is unique to this test.
    unsafe { std::env::set_var(name, "env-secret") };
    let from_env = Solver::from_env_var(name).unwrap();
    unsafe { std::env::remove_var(name) };

    let direct = Solver::new("env-secret").unwrap();
    assert_eq!(from_env.solve(b"payload"), direct.solve(b"payload"));
    assert_eq!(
        from_env.solve(b"payload"),
        "3ZmmcNlQTAYmbV65z0tBjtwF+muqhtHU48tHaDDM8ONc="
    );
}

#[test]
fn empty_env_var_is_missing_secret() {
    let name = "STREAMABLES_SOLVER_TEST_EMPTY_SECRET";
    // SAFETY: the variable name is unique to this test.
    unsafe { std::env::set_var(name, "") };
    let result = Solver::from_env_var(name);
    unsafe { std::env::remove_var(name) };

    assert!(matches!(result.unwrap_err(), SolverError::MissingSecret));
}

#[test]
fn debug_hides_secret() {
    let solver = Solver::new("hunter2").unwrap();
    let dbg = format!("{solver:?}");
    assert!(dbg.contains("Solver"));
    assert!(!dbg.contains("hunter2"));
}

// ── Known vectors ────────────────────────────────────────────────

#[test]
fn rfc4231_case_2() {
    let solver = Solver::new("Jefe").unwrap();
    assert_eq!(
        solver.solve(b"what do ya want for nothing?"),
        "3W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM="
    );
}

#[test]
fn json_payload() {
    let solver = Solver::new("secret").unwrap();
    assert_eq!(
        solver.solve(br#"{"a":1}"#),
        "3qp4uNXX11wmLbKzNeQiIw21f22M0KnO62i1qUXR6hJQ="
    );
}

#[test]
fn empty_payload() {
    let solver = Solver::new(b"secret").unwrap();
    assert_eq!(solver.solve(b""), "3+eZuF5tnR65UEI+C+K3os8Jddv0wr95sOVgixTAZYWk=");
}

#[test]
fn block_size_secret() {
    let solver = Solver::new([b'k'; 64]).unwrap();
    assert_eq!(solver.solve(b"payload"), "3gl/klrL1XyxqeNjj8hz/FbWfwrzUN75ve9ovssTYqfQ=");
}

#[test]
fn secret_longer_than_block_is_hashed() {
    let solver = Solver::new([b'k'; 100]).unwrap();
    assert_eq!(solver.solve(b"payload"), "30fffc5urmn/kYsISswVwUwVq+cwwfl+dZBIqqvFI6f4=");
}

// ── Behaviour ────────────────────────────────────────────────────

#[test]
fn solve_is_repeatable() {
    let solver = Solver::new("secret").unwrap();
    assert_eq!(solver.solve(b"payload"), solver.solve(b"payload"));
}

#[test]
fn clones_agree() {
    let solver = Solver::new("secret").unwrap();
    let clone = solver.clone();
    assert_eq!(solver.solve(b"x"), clone.solve(b"x"));
}

#[test]
fn different_secrets_differ() {
    let a = Solver::new("one").unwrap();
    let b = Solver::new("two").unwrap();
    assert_ne!(a.solve(b"payload"), b.solve(b"payload"));
}

#[test]
fn signature_shape() {
    let sig = Solver::new("secret").unwrap().solve(b"anything");
    assert!(sig.starts_with(SIGNATURE_VERSION));
    // 32-byte digest -> 44 base64 chars
    assert_eq!(sig.len(), 1 + 44);
    assert!(sig.ends_with('='));
}
