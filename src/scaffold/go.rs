//! Go project skeleton
//!
//! Lays out `api/`, `cmd/`, `internal/` and `pkg/` under the target
//! directory, drops a placeholder `cmd/main.go` and a `makefile` whose build
//! and run targets are named after the project.

use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::scaffold::{create_dir, write_file, AbortReason, Outcome};
use crate::utils::paths::{ensure_trailing_slash, is_not_directory_exists, project_name_from_path};
use crate::utils::terminal::Logger;

/// Subdirectories created for every Go project, in creation order
pub const GO_PROJECT_DIRS: [&str; 4] = ["api", "cmd", "internal", "pkg"];

/// Placeholder entry point written to `cmd/main.go`
pub const GO_MAIN_TEMPLATE: &str = "package main\n\
import \"fmt\"\n\
\n\
func main() {\n\
\tfmt.Println(\"Hello, setting!\")\n\
}";

/// Name of the generated task-runner file
pub const MAKEFILE_NAME: &str = "makefile";

/// Render the makefile for `project_name`
pub fn render_makefile(project_name: &str) -> String {
    format!(
        "\n\
         .PHONY: install\n\
         install:\n\
         \tgo mod tidy\n\
         \n\
         .PHONY: test\n\
         test: \n\
         \tgo test ./... \n\
         \n\
         .PHONY: build\n\
         build:\n\
         \tgo build -o ./bin/{name} ./cmd/main.go\n\
         \n\
         \n\
         .PHONY: run\n\
         run: build\n\
         \t./bin/{name}\n\
         \n\
         .PHONY: debug-test\n\
         debug-test: \n\
         \tcd ./internal/server && go test -v -debug=true\n",
        name = project_name
    )
}

/// Generate the Go project skeleton at `path`
///
/// Returns [`Outcome::Aborted`] without touching the filesystem when the path
/// is empty, the directory is missing, or no project name can be derived.
pub fn generate_go_project(path: &Path, logger: &dyn Logger) -> Result<Outcome, ScaffoldError> {
    if path.as_os_str().is_empty() {
        logger.warn(&format!("There is no paths: {}", path.display()));
        return Ok(Outcome::Aborted(AbortReason::EmptyPath));
    }

    let path = ensure_trailing_slash(path);
    if is_not_directory_exists(&path, logger) {
        logger.warn(&format!("Directory not exist: {}", path.display()));
        return Ok(Outcome::Aborted(AbortReason::MissingDirectory(path)));
    }

    let project_name = project_name_from_path(&path, logger);
    if project_name.is_empty() {
        logger.warn(&format!("Cannot derive a project name from: {}", path.display()));
        return Ok(Outcome::Aborted(AbortReason::EmptyProjectName(path)));
    }

    let root = path;
    let mut directories = Vec::with_capacity(GO_PROJECT_DIRS.len());
    for subdir in GO_PROJECT_DIRS {
        let dir = root.join(subdir);
        create_dir(&dir)?;
        logger.info(&format!("{} created.", dir.display()));
        directories.push(dir);
    }

    let main_go = generate_go_main(&root)?;
    logger.info(&format!("{} created.", main_go.display()));

    let makefile = generate_makefile(&root, &project_name)?;
    logger.info(&format!("{} created.", makefile.display()));

    Ok(Outcome::Created {
        root,
        project_name,
        directories,
        files: vec![main_go, makefile],
    })
}

/// Write the placeholder entry point under `root/cmd/`
pub fn generate_go_main(root: &Path) -> Result<PathBuf, ScaffoldError> {
    let main_go = root.join("cmd").join("main.go");
    write_file(&main_go, GO_MAIN_TEMPLATE)?;
    Ok(main_go)
}

/// Write the makefile for `project_name` at `root/makefile`
pub fn generate_makefile(root: &Path, project_name: &str) -> Result<PathBuf, ScaffoldError> {
    let makefile = root.join(MAKEFILE_NAME);
    write_file(&makefile, &render_makefile(project_name))?;
    Ok(makefile)
}
