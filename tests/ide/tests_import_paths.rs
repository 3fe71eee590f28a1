//! Import suggestions and resolution against a real directory tree.

use std::fs;
use std::path::Path;

use solidity_assist::project::Remapping;
use solidity_assist::{AnalysisHost, LineCol, ProjectConfig};
use tempfile::TempDir;

use crate::helpers::analysis_helpers::contextual_labels;
use crate::helpers::source_fixtures::{OWNABLE, SAFE_MATH};

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/Main.sol", "import ");
    write(dir.path(), "src/access/Ownable.sol", OWNABLE);
    write(dir.path(), "lib/math/src/SafeMath.sol", SAFE_MATH);
    write(dir.path(), "README.md", "# project");
    dir
}

#[test]
fn test_import_suggestions_from_disk() {
    let dir = project();
    let main = dir.path().join("src/Main.sol");
    let host = AnalysisHost::new(ProjectConfig::new(dir.path()));

    let items = host.analysis(&main, "import ").completions(LineCol::new(0, 7));
    let labels = contextual_labels(&items);
    assert_eq!(labels, vec!["math/src/SafeMath.sol", "./Main.sol", "./access/Ownable.sol"]);

    let mut unique = labels.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), labels.len());
}

#[test]
fn test_remapped_import_suggestion() {
    let dir = project();
    let main = dir.path().join("src/Main.sol");
    let config = ProjectConfig::new(dir.path()).with_remapping(Remapping::new("@access/", "src/access/"));
    let host = AnalysisHost::new(config);

    let items = host.analysis(&main, "import ").completions(LineCol::new(0, 7));
    assert!(contextual_labels(&items).contains(&"@access/Ownable.sol".to_string()));
}

#[test]
fn test_dependency_import_resolves_from_disk() {
    let dir = project();
    let main = dir.path().join("src/Main.sol");
    let host = AnalysisHost::new(ProjectConfig::new(dir.path()));
    let text = "import \"math/SafeMath.sol\";\ncontract Main { using SafeMath for uint; }";

    let analysis = host.analysis(&main, text);
    let library = analysis.table().contract_by_name("SafeMath").unwrap();
    let file = analysis.table().file(library.file).unwrap();
    assert_eq!(file.path(), dir.path().join("lib/math/src/SafeMath.sol"));
}

#[test]
fn test_open_buffer_shadows_disk() {
    let dir = project();
    let main = dir.path().join("src/Main.sol");
    let ownable = dir.path().join("src/access/Ownable.sol");
    let mut host = AnalysisHost::new(ProjectConfig::new(dir.path()));
    host.set_file_content(&ownable, "contract Ownable { function edited() public {} }");

    let text = "import \"./access/Ownable.sol\";\ncontract Main is Ownable {}";
    let analysis = host.analysis(&main, text);
    let id = analysis.table().contract_id("Main").unwrap();
    let names: Vec<_> = analysis.table().all_functions(id).map(|f| f.name.to_string()).collect();
    assert_eq!(names, vec!["edited"]);

    host.remove_file(&ownable);
    let analysis = host.analysis(&main, text);
    let id = analysis.table().contract_id("Main").unwrap();
    let names: Vec<_> = analysis.table().all_functions(id).map(|f| f.name.to_string()).collect();
    assert_eq!(names, vec!["transferOwnership"]);
}
