//! Headless pipeline tests: the materializer driven by synthetic intents
//! over in-test port doubles. No real prompt, no real disk.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tresgen_core::{
    application::{
        ApplicationError, Materializer,
        ports::{Filesystem, TemplateSource},
    },
    domain::{Manifest, ProjectIntent, TemplateKind},
    error::{TresgenError, TresgenResult},
};

// ── port doubles ──────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct FakeFs {
    inner: Arc<Mutex<FakeFsInner>>,
}

#[derive(Default)]
struct FakeFsInner {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl FakeFs {
    fn seed_file(&self, path: &str, content: &str) {
        let path = PathBuf::from(path);
        let mut inner = self.inner.lock().unwrap();
        let mut dir = path.parent().map(Path::to_path_buf);
        while let Some(d) = dir {
            if d.as_os_str().is_empty() {
                break;
            }
            inner.dirs.insert(d.clone());
            dir = d.parent().map(Path::to_path_buf);
        }
        inner.files.insert(path, content.into());
    }

    fn file(&self, path: &str) -> Option<String> {
        self.inner.lock().unwrap().files.get(Path::new(path)).cloned()
    }

    fn files_under(&self, prefix: &str) -> Vec<PathBuf> {
        let prefix = Path::new(prefix);
        self.inner
            .lock()
            .unwrap()
            .files
            .keys()
            .filter(|p| p.starts_with(prefix))
            .cloned()
            .collect()
    }
}

impl Filesystem for FakeFs {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.files.contains_key(path) || inner.dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> TresgenResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.dirs.insert(current.clone());
        }
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> TresgenResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.dirs.retain(|d| !d.starts_with(path));
        inner.files.retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn copy_dir_all(&self, src: &Path, dst: &Path) -> TresgenResult<()> {
        let copies: Vec<(PathBuf, String)> = {
            let inner = self.inner.lock().unwrap();
            inner
                .files
                .iter()
                .filter(|(p, _)| p.starts_with(src))
                .map(|(p, c)| (dst.join(p.strip_prefix(src).unwrap()), c.clone()))
                .collect()
        };
        for (path, content) in copies {
            if let Some(parent) = path.parent() {
                self.create_dir_all(parent)?;
            }
            self.inner.lock().unwrap().files.insert(path, content);
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> TresgenResult<String> {
        self.inner.lock().unwrap().files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.into(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> TresgenResult<()> {
        self.inner
            .lock()
            .unwrap()
            .files
            .insert(path.into(), content.into());
        Ok(())
    }
}

struct FakeTemplates {
    root: PathBuf,
}

impl TemplateSource for FakeTemplates {
    fn resolve(&self, kind: TemplateKind) -> TresgenResult<PathBuf> {
        Ok(self.root.join(kind.as_str()))
    }
}

// ── fixtures ──────────────────────────────────────────────────────────────────

const VUE_MANIFEST: &str = r#"{
  "name": "{{projectName}}",
  "version": "0.0.0",
  "private": true,
  "scripts": {
    "dev": "vite",
    "build": "vue-tsc && vite build"
  },
  "dependencies": {
    "vue": "^3.5.13",
    "three": "^0.170.0",
    "@tresjs/core": "^4.3.0"
  }
}"#;

fn seeded_fs() -> FakeFs {
    let fs = FakeFs::default();
    fs.seed_file("/templates/vue/package.json", VUE_MANIFEST);
    fs.seed_file(
        "/templates/vue/README.md",
        "# {{projectName}}\n\nA TresJS project: {{projectName}}.\n",
    );
    fs.seed_file("/templates/vue/index.html", "<div id=\"app\"></div>\n");
    fs.seed_file("/templates/vue/src/main.ts", "import './App.vue'\n");
    fs
}

fn materializer(fs: &FakeFs) -> Materializer {
    Materializer::new(
        Box::new(fs.clone()),
        Box::new(FakeTemplates {
            root: PathBuf::from("/templates"),
        }),
    )
}

fn intent(eslint: bool, packages: &[&str]) -> ProjectIntent {
    ProjectIntent::builder()
        .name("demo-app")
        .unwrap()
        .template(TemplateKind::Vue)
        .eslint(eslint)
        .packages(packages.iter().map(|s| s.to_string()).collect())
        .build()
        .unwrap()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[test]
fn materialize_copies_tree_and_substitutes_allow_listed_files() {
    let fs = seeded_fs();
    let report = materializer(&fs)
        .materialize(&intent(false, &[]), Path::new("/work"))
        .unwrap();

    assert_eq!(report.target, PathBuf::from("/work/demo-app"));
    assert!(!report.replaced_existing);

    let readme = fs.file("/work/demo-app/README.md").unwrap();
    assert!(readme.contains("# demo-app"));
    assert!(!readme.contains("{{projectName}}"));

    // Files outside the allow-list are copied verbatim.
    assert_eq!(
        fs.file("/work/demo-app/src/main.ts").unwrap(),
        "import './App.vue'\n"
    );
}

#[test]
fn scenario_vue_with_eslint_and_cientos() {
    let fs = seeded_fs();
    materializer(&fs)
        .materialize(&intent(true, &["cientos"]), Path::new("/work"))
        .unwrap();

    let manifest =
        Manifest::from_json(&fs.file("/work/demo-app/package.json").unwrap()).unwrap();
    assert_eq!(manifest.name(), Some("demo-app"));
    assert_eq!(manifest.dependency("@tresjs/cientos"), Some("latest"));
    assert_eq!(manifest.dev_dependency("typescript"), Some("latest"));
    assert_eq!(manifest.dev_dependency("vue-tsc"), Some("latest"));
    assert_eq!(manifest.dev_dependency("eslint"), Some("^9.16.0"));
    assert_eq!(manifest.script("lint"), Some("eslint ."));
    assert_eq!(manifest.script("lint:fix"), Some("eslint . --fix"));
    // template entries survive the merge
    assert_eq!(manifest.dependency("vue"), Some("^3.5.13"));

    let eslintrc: serde_json::Value =
        serde_json::from_str(&fs.file("/work/demo-app/.eslintrc.json").unwrap()).unwrap();
    assert_eq!(
        eslintrc["extends"],
        serde_json::json!(["@tresjs/eslint-config"])
    );
    assert_eq!(eslintrc["extends"].as_array().unwrap().len(), 1);
}

#[test]
fn lint_disabled_produces_no_linter_artifacts() {
    let fs = seeded_fs();
    materializer(&fs)
        .materialize(&intent(false, &[]), Path::new("/work"))
        .unwrap();

    assert!(fs.file("/work/demo-app/.eslintrc.json").is_none());
    let manifest =
        Manifest::from_json(&fs.file("/work/demo-app/package.json").unwrap()).unwrap();
    assert_eq!(manifest.script("lint"), None);
    assert_eq!(manifest.script("lint:fix"), None);
}

#[test]
fn unknown_package_key_passes_through() {
    let fs = seeded_fs();
    materializer(&fs)
        .materialize(&intent(false, &["not-a-real-package"]), Path::new("/work"))
        .unwrap();

    let manifest =
        Manifest::from_json(&fs.file("/work/demo-app/package.json").unwrap()).unwrap();
    assert_eq!(manifest.dependency("not-a-real-package"), Some("latest"));
}

#[test]
fn existing_target_is_destroyed_and_recreated() {
    let fs = seeded_fs();
    fs.seed_file("/work/demo-app/stale.txt", "left over from a dead run");

    let report = materializer(&fs)
        .materialize(&intent(false, &[]), Path::new("/work"))
        .unwrap();

    assert!(report.replaced_existing);
    assert!(fs.file("/work/demo-app/stale.txt").is_none());
    assert!(fs.file("/work/demo-app/package.json").is_some());
}

#[test]
fn missing_manifest_aborts_without_cleanup() {
    let fs = FakeFs::default();
    // A template tree with no package.json: steps 1-5 commit, step 6 fails.
    fs.seed_file("/templates/vue/README.md", "# {{projectName}}\n");

    let err = materializer(&fs)
        .materialize(&intent(false, &[]), Path::new("/work"))
        .unwrap_err();

    assert!(matches!(
        err,
        TresgenError::Application(ApplicationError::FilesystemError { .. })
    ));
    // No rollback: the half-materialized copy is still there.
    assert!(!fs.files_under("/work/demo-app").is_empty());
}

#[test]
fn corrupt_manifest_is_a_manifest_error() {
    let fs = FakeFs::default();
    fs.seed_file("/templates/vue/package.json", "{ not json");

    let err = materializer(&fs)
        .materialize(&intent(false, &[]), Path::new("/work"))
        .unwrap_err();

    assert!(matches!(
        err,
        TresgenError::Application(ApplicationError::ManifestError { .. })
    ));
}

#[test]
fn materializing_twice_is_stable() {
    let fs = seeded_fs();
    let m = materializer(&fs);
    let i = intent(true, &["cientos"]);

    m.materialize(&i, Path::new("/work")).unwrap();
    let first = fs.file("/work/demo-app/package.json").unwrap();

    let report = m.materialize(&i, Path::new("/work")).unwrap();
    assert!(report.replaced_existing);
    // The second run starts from the pristine template again, so the final
    // manifest content is identical.
    assert_eq!(fs.file("/work/demo-app/package.json").unwrap(), first);
}
