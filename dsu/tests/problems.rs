use dsu::encode::complement::Satisfiability;
use dsu::problem::{solve_toml, Answer, Problem, ProblemError};

#[test]
fn island_count() {
    let answer = solve_toml(
        r#"
type = "islands"
grid = ["110", "010", "001"]
"#,
    )
    .unwrap();
    assert_eq!(answer, Answer::Count(2));
}

#[test]
fn largest_island() {
    let answer = solve_toml(
        r#"
type = "max-area"
grid = ["11001", "10011", "00011"]
"#,
    )
    .unwrap();
    assert_eq!(answer, Answer::Count(5));
}

#[test]
fn slash_regions() {
    // TOML literal strings keep the backslash as-is
    let answer = solve_toml(
        r#"
type = "regions"
grid = ['/\', '\/']
"#,
    )
    .unwrap();
    assert_eq!(answer, Answer::Count(5));

    let answer = solve_toml("type = \"regions\"\ngrid = [\"/\"]\n").unwrap();
    assert_eq!(answer, Answer::Count(2));
}

#[test]
fn equations() {
    let answer = solve_toml(
        r#"
type = "equations"
equations = ["a==b", "b!=a"]
"#,
    )
    .unwrap();
    assert_eq!(
        answer,
        Answer::Satisfiability(Satisfiability::Unsatisfiable)
    );

    let answer = solve_toml(
        r#"
type = "equations"
equations = ["a==b", "b==c", "c!=d"]
"#,
    )
    .unwrap();
    assert_eq!(answer, Answer::Satisfiability(Satisfiability::Satisfiable));
}

#[test]
fn connect_points() {
    let answer = solve_toml(
        r#"
type = "connect-points"
points = [[0, 0], [2, 2], [3, 10], [5, 2], [7, 0]]
"#,
    )
    .unwrap();
    assert_eq!(answer, Answer::Cost(20));
}

#[test]
fn graph_components() {
    let p = Problem::from_toml_str(
        r#"
type = "components"
vertices = 5
edges = [[0, 1], [1, 2], [3, 4]]
"#,
    )
    .unwrap();
    assert_eq!(p.solve().unwrap(), Answer::Count(2));
}

#[test]
fn out_of_range_vertex_fails() {
    let err = solve_toml(
        r#"
type = "components"
vertices = 2
edges = [[0, 3]]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ProblemError::Solve(_)));
    assert_eq!(
        err.to_string(),
        "solve error: index 3 out of range for 2 elements"
    );
}

#[test]
fn missing_field_is_config_error() {
    let err = solve_toml("type = \"islands\"\n").unwrap_err();
    assert!(matches!(err, ProblemError::Config(_)));
}
