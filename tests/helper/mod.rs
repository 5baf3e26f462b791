//! Throwaway monorepo fixtures

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

/// A repository laid out like an SDK monorepo, living in a temp directory
pub struct Repo {
    dir: TempDir,
}

impl Repo {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).unwrap()
    }

    pub fn project_path(module: &str) -> String {
        format!("sdk/group/{module}/{module}.xcodeproj/project.pbxproj")
    }

    pub fn pod_path(module: &str) -> String {
        format!("sdk/group/{module}/{module}.podspec.json")
    }

    /// Project file with a Debug and a Release build setting
    pub fn with_project(&self, module: &str, version: &str) -> &Self {
        self.with_project_versions(module, version, version)
    }

    pub fn with_project_versions(&self, module: &str, debug: &str, release: &str) -> &Self {
        let content = format!(
            r#"// !$*UTF8*$!
{{
	objects = {{
		0A1 /* Debug */ = {{
			buildSettings = {{
				DYLIB_CURRENT_VERSION = 1;
				MARKETING_VERSION = {debug};
				PRODUCT_NAME = {module};
			}};
		}};
		0A2 /* Release */ = {{
			buildSettings = {{
				MARKETING_VERSION = "{release}";
				PRODUCT_NAME = {module};
			}};
		}};
	}};
}}
"#
        );
        self.write(&Self::project_path(module), &content)
    }

    /// Pod manifest depending on `dependencies` at the same version
    pub fn with_pod(&self, module: &str, version: &str, dependencies: &[&str]) -> &Self {
        let mut deps = serde_json::Map::new();
        for dependency in dependencies {
            deps.insert(dependency.to_string(), json!([format!("~> {version}")]));
        }
        let manifest = json!({
            "name": module,
            "version": version,
            "summary": "Module for the SDK",
            "source": {
                "git": "https://github.com/example/sdk.git",
                "tag": format!("{module}_{version}")
            },
            "dependencies": deps
        });
        self.write(
            &Self::pod_path(module),
            &serde_json::to_string_pretty(&manifest).unwrap(),
        )
    }

    pub fn with_package(&self, modules: &[&str]) -> &Self {
        let libraries: String = modules
            .iter()
            .map(|m| format!("        .library(name: \"{m}\", targets: [\"{m}\"]),\n"))
            .collect();
        let content = format!(
            "// swift-tools-version:5.3\nimport PackageDescription\n\nlet package = Package(\n    name: \"SDK\",\n    products: [\n{libraries}    ]\n)\n"
        );
        self.write("Package.swift", &content)
    }

    /// Every file under the root with its content
    pub fn snapshot(&self) -> BTreeMap<PathBuf, String> {
        let mut files = BTreeMap::new();
        collect(self.root(), self.root(), &mut files);
        files
    }
}

fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<PathBuf, String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let relative = path.strip_prefix(root).unwrap().to_path_buf();
            files.insert(relative, fs::read_to_string(&path).unwrap());
        }
    }
}
