use srcdump::{srcdump, DumpBuilder, DumpProfile};
use std::fs;
use tempfile::tempdir;

#[test]
fn dumps_a_react_project_end_to_end() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src/components")).unwrap();
    fs::create_dir_all(root.join("node_modules/react")).unwrap();
    fs::create_dir_all(root.join("dist")).unwrap();
    fs::write(root.join("index.html"), "<!doctype html>\n").unwrap();
    fs::write(root.join("src/App.tsx"), "export const App = () => null;\n").unwrap();
    fs::write(
        root.join("src/components/Button.tsx"),
        "export const Button = () => null;\n",
    )
    .unwrap();
    fs::write(root.join("src/style.css"), "body {}\n").unwrap();
    fs::write(root.join("node_modules/react/index.js"), "module.exports = {};\n").unwrap();
    fs::write(root.join("dist/bundle.js"), "!function(){}();\n").unwrap();
    fs::write(root.join("README.md"), "# demo\n").unwrap();

    let out = root.join("dump.txt");
    let options = DumpBuilder::new(root).output(&out).build();
    let report = srcdump(options.clone()).unwrap();

    assert_eq!(report.files, 4);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.output, out);

    let dump = fs::read_to_string(&out).unwrap();
    assert_eq!(dump.matches("=== Name:").count(), 4);
    assert!(!dump.contains("node_modules"));
    assert!(!dump.contains("bundle.js"));
    assert!(!dump.contains("README"));

    // walk order puts the root-level page before the src tree
    let page = dump.find("=== Path: index.html").unwrap();
    let app = dump.find("=== Path: src/App.tsx").unwrap();
    let button = dump.find("=== Path: src/components/Button.tsx").unwrap();
    let style = dump.find("=== Path: src/style.css").unwrap();
    assert!(page < app && app < button && button < style);

    // a second run over the unchanged tree reproduces the dump byte for byte
    let before = fs::read(&out).unwrap();
    srcdump(options).unwrap();
    assert_eq!(fs::read(&out).unwrap(), before);
}

#[test]
fn dumps_an_extended_project_end_to_end() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("styles")).unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join(".env"), "API_KEY=dev\n").unwrap();
    fs::write(root.join("config.json"), "{ \"strict\": true }\n").unwrap();
    fs::write(root.join("styles/main.scss"), "$accent: teal;\n").unwrap();
    fs::write(root.join("src/index.ts"), "export {};\n").unwrap();

    let out = root.join("dump.txt");
    let options = DumpBuilder::new(root)
        .output(&out)
        .profile(DumpProfile::Extended)
        .build();
    let report = srcdump(options).unwrap();

    assert_eq!(report.files, 4);
    let dump = fs::read_to_string(&out).unwrap();
    assert!(dump.contains("=== Name: .env"));
    assert!(dump.contains("API_KEY=dev"));
    assert!(dump.contains("=== Path: config.json"));
    assert!(dump.contains("=== Path: styles/main.scss"));
    assert!(dump.contains("=== Path: src/index.ts"));
}
