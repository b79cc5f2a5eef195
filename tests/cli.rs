use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
    sync::Mutex,
};

/// Held while writing and running scripts, as a script open for writing in one test may otherwise be inherited by a process spawned in another.
static SPAWN: Mutex<()> = Mutex::new(());

const TRIANGLE: &str = "c A triangle\np edge 3 3\ne 1 2\ne 2 3\ne 1 3\n";

fn color2sat() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_color2sat"))
}

fn write_graph(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("graph");
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

mod encoder {
    use super::*;

    #[test]
    fn triangle() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);

        let output = Command::new(color2sat())
            .arg(&graph)
            .arg("3")
            .output()
            .expect("run");

        assert!(output.status.success());
        let text = stdout(&output);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("c CNF: 3-coloring of 3 vertices, 3 edges"));
        // 3 + 3 * 3 + 3 * 3
        assert_eq!(lines.next(), Some("p cnf 9 21"));
        assert_eq!(lines.next(), Some("1 2 3 0"));
        assert_eq!(lines.count(), 20);
    }

    #[test]
    fn invalid_k() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);

        for k in ["0", "-2", "three", "3x"] {
            let output = Command::new(color2sat())
                .arg(&graph)
                .arg(k)
                .output()
                .expect("run");
            assert_eq!(output.status.code(), Some(1), "k = {k}");
            assert!(stderr(&output).contains("Invalid k"), "k = {k}");
            assert!(output.stdout.is_empty());
        }
    }

    #[test]
    fn unencodable_k() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);

        let output = Command::new(color2sat())
            .arg(&graph)
            .arg(usize::MAX.to_string())
            .output()
            .expect("run");
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).starts_with("ERROR:"));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn malformed_graph() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "bad.col", "e 1 2\np edge 2 1\n");

        let output = Command::new(color2sat())
            .arg(&graph)
            .arg("2")
            .output()
            .expect("run");
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).starts_with("ERROR:"));
    }

    #[test]
    fn usage() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let output = Command::new(color2sat()).output().expect("run");
        assert_eq!(output.status.code(), Some(1));
    }
}

#[cfg(unix)]
mod drivers {
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    /// The model of a triangle with vertex v colored v.
    const TRIANGLE_MODEL: &str = "1 -2 -3 -4 5 -6 -7 -8 9 0";

    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}")).expect("write script");
        let mut permissions = std::fs::metadata(&path).expect("metadata").permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(&path, permissions).expect("permissions");
        path
    }

    /// A minisat-like solver which finds the formula from color2sat satisfiable from k = 3, with `model`.
    fn minisat(dir: &Path, model: &str) -> PathBuf {
        script(
            dir,
            "minisat",
            &format!(
                "read header
k=${{header#c CNF: }}
k=${{k%%-*}}
cat > /dev/null
for last; do :; done
if [ \"$k\" -ge 3 ]; then
  printf 'SAT\\n{model}\\n' > \"$last\"
  exit 10
fi
printf 'UNSAT\\n' > \"$last\"
exit 20
"
            ),
        )
    }

    /// A kissat-like solver which finds the formula from color2sat satisfiable from k = 3.
    fn kissat(dir: &Path) -> PathBuf {
        script(
            dir,
            "kissat",
            &format!(
                "if grep -q 'c CNF: [3-9]-coloring' \"$1\"; then
  echo 's SATISFIABLE'
  echo 'v {TRIANGLE_MODEL}'
  exit 10
fi
echo 's UNSATISFIABLE'
exit 20
"
            ),
        )
    }

    fn k_colorability() -> Command {
        Command::new(env!("CARGO_BIN_EXE_k_colorability"))
    }

    #[test]
    fn ascending_search() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);
        let solver = minisat(dir.path(), TRIANGLE_MODEL);

        let output = k_colorability()
            .arg("--color2sat")
            .arg(color2sat())
            .arg("--solver")
            .arg(&solver)
            .arg("-q")
            .arg(&graph)
            .output()
            .expect("run");

        assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
        assert_eq!(stdout(&output), format!("k = 3\nSAT\n{TRIANGLE_MODEL}\n"));
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn unwritable_stdout() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);
        let solver = minisat(dir.path(), TRIANGLE_MODEL);
        let full = std::fs::OpenOptions::new()
            .write(true)
            .open("/dev/full")
            .expect("/dev/full");

        let output = k_colorability()
            .arg("--color2sat")
            .arg(color2sat())
            .arg("--solver")
            .arg(&solver)
            .arg("-q")
            .arg(&graph)
            .stdout(std::process::Stdio::from(full))
            .output()
            .expect("run");

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("ERROR: failed to write to stdout"));
    }

    #[test]
    fn exhausted() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);
        let solver = minisat(dir.path(), TRIANGLE_MODEL);
        let outfile = dir.path().join("result.txt");

        let output = k_colorability()
            .args(["-k", "2", "-q", "-o"])
            .arg(&outfile)
            .arg("--color2sat")
            .arg(color2sat())
            .arg("--solver")
            .arg(&solver)
            .arg(&graph)
            .output()
            .expect("run");

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert_eq!(
            std::fs::read_to_string(&outfile).expect("outfile"),
            "UNSAT for all k up to 2\n"
        );
    }

    #[test]
    fn stdin_graph_with_coloring() {
        use std::io::Write;

        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let solver = minisat(dir.path(), TRIANGLE_MODEL);

        let mut child = k_colorability()
            .arg("--color2sat")
            .arg(color2sat())
            .arg("--solver")
            .arg(&solver)
            .args(["--verify", "--show-coloring", "-q", "-"])
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .spawn()
            .expect("spawn");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(TRIANGLE.as_bytes())
            .expect("write graph");
        let output = child.wait_with_output().expect("run");

        assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
        assert!(stdout(&output).ends_with(
            "c vertex 1 color 1\nc vertex 2 color 2\nc vertex 3 color 3\n"
        ));
    }

    #[test]
    fn verification_failure_is_fatal() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);
        // Vertices 1 and 2 share color 1.
        let solver = minisat(dir.path(), "1 -2 -3 4 -5 -6 -7 -8 9 0");

        let output = k_colorability()
            .arg("--color2sat")
            .arg(color2sat())
            .arg("--solver")
            .arg(&solver)
            .args(["--verify", "-q"])
            .arg(&graph)
            .output()
            .expect("run");

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("ERROR: edge 1-2 joins two vertices of color 1"));
    }

    #[test]
    fn json_report() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);
        let solver = minisat(dir.path(), TRIANGLE_MODEL);

        let output = k_colorability()
            .arg("--color2sat")
            .arg(color2sat())
            .arg("--solver")
            .arg(&solver)
            .args(["--format", "json", "-q"])
            .arg(&graph)
            .output()
            .expect("run");

        assert_eq!(output.status.code(), Some(0));
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
        assert_eq!(value["graph"], "triangle");
        assert_eq!(value["outcome"]["k"], 3);
        assert_eq!(value["attempts"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn kept_artifacts() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);
        let solver = minisat(dir.path(), TRIANGLE_MODEL);
        let keep = dir.path().join("keep");

        let output = k_colorability()
            .arg("--color2sat")
            .arg(color2sat())
            .arg("--solver")
            .arg(&solver)
            .arg("--keep-dir")
            .arg(&keep)
            .arg("-q")
            .arg(&graph)
            .output()
            .expect("run");

        assert_eq!(output.status.code(), Some(0));
        for name in ["triangle_2k.cnf", "sol_triangle_2k.out", "triangle_3k.cnf", "sol_triangle_3k.out"] {
            assert!(keep.join(name).is_file(), "{name}");
        }
        assert!(!keep.join("triangle_4k.cnf").exists());
    }

    #[test]
    fn missing_solver() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);

        let output = k_colorability()
            .arg("--color2sat")
            .arg(color2sat())
            .arg("--solver")
            .arg(dir.path().join("minisat"))
            .arg("-q")
            .arg(&graph)
            .output()
            .expect("run");

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).contains("not found or not executable"));
    }

    #[test]
    fn malformed_graph() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "bad.col", "c no problem line\ne 1 2\n");

        let output = k_colorability()
            .arg("--color2sat")
            .arg(dir.path().join("never-run"))
            .arg("-q")
            .arg(&graph)
            .output()
            .expect("run");

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).starts_with("ERROR:"));
    }

    #[test]
    fn encoder_failure_relayed() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);
        let encoder = script(
            dir.path(),
            "color2sat",
            "cat > /dev/null\necho 'ERROR: out of memory' >&2\nexit 1\n",
        );

        let output = k_colorability()
            .arg("--color2sat")
            .arg(&encoder)
            .arg("-q")
            .arg(&graph)
            .output()
            .expect("run");

        assert_eq!(output.status.code(), Some(2));
        assert!(stderr(&output).starts_with("ERROR: out of memory\n"));
    }

    #[test]
    fn color_solve() {
        let _guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tempdir");
        let graph = write_graph(dir.path(), "triangle.col", TRIANGLE);
        let kissat = kissat(dir.path());

        let run = |k: &str| {
            Command::new(env!("CARGO_BIN_EXE_color_solve"))
                .arg(&graph)
                .arg(k)
                .arg("--color2sat")
                .arg(color2sat())
                .arg("--kissat")
                .arg(&kissat)
                .arg("--cnf-dir")
                .arg(dir.path().join("cnf"))
                .arg("--sol-dir")
                .arg(dir.path().join("sol"))
                .arg("-q")
                .output()
                .expect("run")
        };

        let output = run("3");
        assert_eq!(output.status.code(), Some(10), "{}", stderr(&output));
        let text = stdout(&output);
        assert!(text.contains("Generating CNF for 'triangle' with k=3"));
        assert!(text.contains("Result: SATISFIABLE (exit code 10)"));
        assert!(dir.path().join("cnf").join("triangle_3k.cnf").is_file());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("sol").join("sol_triangle_3k.out"))
                .expect("solution"),
            format!("s SATISFIABLE\nv {TRIANGLE_MODEL}\n")
        );

        let output = run("2");
        assert_eq!(output.status.code(), Some(20));
        assert!(stdout(&output).contains("Result: UNSATISFIABLE (exit code 20)"));
    }
}
