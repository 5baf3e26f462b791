//! Consistency checks across manifest kinds

use crate::config::VersionPolicy;
use crate::version::error::VersionError;
use crate::version::extractor::VersionSource;
use crate::version::types::{ALL_MODULES, Finding, FindingKind, VersionRecord};

/// Outcome of a verification run that got past the uniqueness checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_error())
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    pub fn is_consistent(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Fail with every error finding combined, or return the warnings.
    pub fn into_result(self) -> Result<Vec<Finding>, VersionError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.findings.into_iter().partition(Finding::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(VersionError::Inconsistent(errors))
        }
    }
}

/// Cross-check project files, pod manifests and the package manifest.
///
/// Uniqueness violations abort immediately. Every other problem is
/// collected into the report; errors make [`Report::into_result`] fail,
/// warnings never do.
pub fn verify<S: VersionSource>(source: &S, policy: VersionPolicy) -> Result<Report, VersionError> {
    let project = source.project_versions()?;
    let pods = source.pod_versions()?;
    let package = source.package_modules()?;

    let mut findings = Vec::new();

    if policy == VersionPolicy::Uniform {
        let project_version = repository_version(&project)?;
        let pod_version = repository_version(&pods)?;

        if project_version != pod_version {
            findings.push(Finding::error(
                FindingKind::CrossKindMismatch,
                ALL_MODULES,
                format!("Pod manifest versions {pods} don't match project file versions {project}."),
            ));
        }
    }

    for (module, pod_version) in pods.iter() {
        match project.get(module) {
            None => findings.push(Finding::error(
                FindingKind::MissingProjectFile,
                module,
                format!("Module {module} has a pod manifest but no project file."),
            )),
            Some(project_version) if project_version != pod_version => {
                findings.push(Finding::error(
                    FindingKind::CrossKindMismatch,
                    module,
                    format!(
                        "Module {module} has a pod manifest version {pod_version} but a project file version {project_version}."
                    ),
                ))
            }
            Some(_) => {}
        }
    }

    for module in &package {
        if !pods.contains(module) {
            findings.push(Finding::error(
                FindingKind::MissingPodManifest,
                module,
                format!(
                    "Module {module} found in the package manifest but does not have a pod manifest."
                ),
            ));
        }
    }

    for module in pods.modules() {
        if !package.iter().any(|m| m == module) {
            findings.push(Finding::warning(
                FindingKind::NotInPackageManifest,
                module,
                format!(
                    "Module {module} has a pod manifest but is not in the package manifest. It cannot be acquired via the package manager."
                ),
            ));
        }
    }

    for module in project.modules() {
        if !package.iter().any(|m| m == module) && !pods.contains(module) {
            findings.push(Finding::warning(
                FindingKind::Unreleased,
                module,
                format!(
                    "Module {module} is on the main branch but not available via any release mechanism."
                ),
            ));
        }
    }

    Ok(Report { findings })
}

/// Current version of `module`, or of the whole repository when `None`.
///
/// The repository version only exists when every project file agrees.
pub fn current_version<S: VersionSource>(
    source: &S,
    module: Option<&str>,
) -> Result<String, VersionError> {
    let project = source.project_versions()?;

    match module {
        Some(module) => project
            .get(module)
            .map(str::to_string)
            .ok_or_else(|| VersionError::UnknownModule(module.to_string())),
        None => repository_version(&project).map(str::to_string),
    }
}

/// The single version shared by every module of the record.
fn repository_version(record: &VersionRecord) -> Result<&str, VersionError> {
    match record.distinct_versions().as_slice() {
        [] => Err(VersionError::NoModules(record.kind())),
        [version] => Ok(*version),
        _ => Err(VersionError::NotUniform {
            kind: record.kind(),
            versions: record.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ManifestKind;
    use crate::version::extractor::MockVersionSource;
    use crate::version::types::Severity;
    use rstest::rstest;
    use std::path::Path;

    fn record(kind: ManifestKind, versions: &[(&str, &str)]) -> VersionRecord {
        let mut record = VersionRecord::new(kind);
        for (module, version) in versions {
            record
                .insert(module, version, Path::new("manifest"))
                .unwrap();
        }
        record
    }

    fn source(
        project: &[(&str, &str)],
        pods: &[(&str, &str)],
        package: &[&str],
    ) -> MockVersionSource {
        let project = record(ManifestKind::ProjectFile, project);
        let pods = record(ManifestKind::PodManifest, pods);
        let package: Vec<String> = package.iter().map(|m| m.to_string()).collect();

        let mut mock = MockVersionSource::new();
        mock.expect_project_versions()
            .returning(move || Ok(project.clone()));
        mock.expect_pod_versions()
            .returning(move || Ok(pods.clone()));
        mock.expect_package_modules()
            .returning(move || Ok(package.clone()));
        mock
    }

    #[test]
    fn verify_warns_for_module_missing_from_package_manifest() {
        let source = source(
            &[("ModA", "1.0.0"), ("ModB", "1.0.0")],
            &[("ModA", "1.0.0"), ("ModB", "1.0.0")],
            &["ModA"],
        );

        let report = verify(&source, VersionPolicy::PerModule).unwrap();

        assert!(report.is_consistent());
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, FindingKind::NotInPackageManifest);
        assert_eq!(warnings[0].module, "ModB");
    }

    #[test]
    fn verify_fails_on_cross_kind_mismatch() {
        let source = source(&[("ModA", "1.0.0")], &[("ModA", "1.0.1")], &["ModA"]);

        let report = verify(&source, VersionPolicy::PerModule).unwrap();
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, FindingKind::CrossKindMismatch);

        let result = report.into_result();
        assert!(matches!(result, Err(VersionError::Inconsistent(ref e)) if e.len() == 1));
    }

    #[rstest]
    #[case("1.0.0", "1.0.0", true)]
    #[case("1.0.0", "1.0.1", false)]
    #[case("1.0.0", "1.0.0-beta.1", false)]
    #[case("1.0", "1.0.0", false)]
    fn verify_fails_iff_shared_versions_differ(
        #[case] project_version: &str,
        #[case] pod_version: &str,
        #[case] consistent: bool,
    ) {
        let source = source(
            &[("ModA", project_version)],
            &[("ModA", pod_version)],
            &["ModA"],
        );
        let report = verify(&source, VersionPolicy::PerModule).unwrap();
        assert_eq!(report.is_consistent(), consistent);
    }

    #[test]
    fn verify_collects_every_finding_before_failing() {
        let source = source(
            &[("ModA", "1.0.0"), ("ModC", "3.0.0")],
            &[("ModA", "1.0.1"), ("ModB", "2.0.0")],
            &["ModA", "ModD"],
        );

        let report = verify(&source, VersionPolicy::PerModule).unwrap();
        let kinds: Vec<_> = report.findings.iter().map(|f| (f.severity, f.kind)).collect();

        assert_eq!(
            kinds,
            vec![
                (Severity::Error, FindingKind::CrossKindMismatch),
                (Severity::Error, FindingKind::MissingProjectFile),
                (Severity::Error, FindingKind::MissingPodManifest),
                (Severity::Warning, FindingKind::NotInPackageManifest),
                (Severity::Warning, FindingKind::Unreleased),
            ]
        );
    }

    #[test]
    fn verify_uniform_rejects_mixed_project_versions() {
        let source = source(
            &[("ModA", "1.0.0"), ("ModB", "1.1.0")],
            &[("ModA", "1.0.0"), ("ModB", "1.1.0")],
            &["ModA", "ModB"],
        );

        let result = verify(&source, VersionPolicy::Uniform);
        assert!(matches!(
            result,
            Err(VersionError::NotUniform {
                kind: ManifestKind::ProjectFile,
                ..
            })
        ));
    }

    #[test]
    fn verify_uniform_compares_repository_versions() {
        let source = source(&[("ModA", "1.0.0")], &[("ModB", "1.1.0")], &[]);

        let report = verify(&source, VersionPolicy::Uniform).unwrap();
        assert!(
            report
                .errors()
                .any(|f| f.kind == FindingKind::CrossKindMismatch)
        );
    }

    #[rstest]
    #[case(&[], &[("ModA", "1.0.0")], ManifestKind::ProjectFile)]
    #[case(&[("ModA", "1.0.0")], &[], ManifestKind::PodManifest)]
    fn verify_uniform_requires_a_repository_version(
        #[case] project: &[(&str, &str)],
        #[case] pods: &[(&str, &str)],
        #[case] missing: ManifestKind,
    ) {
        let source = source(project, pods, &[]);

        let result = verify(&source, VersionPolicy::Uniform);
        assert!(matches!(result, Err(VersionError::NoModules(kind)) if kind == missing));
    }

    #[test]
    fn verify_uniform_mismatch_applies_to_all_modules() {
        let source = source(&[("ModA", "1.0.0")], &[("ModA", "1.0.1")], &["ModA"]);

        let report = verify(&source, VersionPolicy::Uniform).unwrap();
        let repository: Vec<_> = report
            .errors()
            .filter(|f| f.module == ALL_MODULES)
            .collect();
        assert_eq!(repository.len(), 1);
        assert_eq!(repository[0].kind, FindingKind::CrossKindMismatch);
    }

    #[test]
    fn verify_propagates_extraction_errors() {
        let mut mock = MockVersionSource::new();
        mock.expect_project_versions().returning(|| {
            Err(VersionError::Conflict {
                kind: ManifestKind::ProjectFile,
                module: "ModA".to_string(),
                existing: "1.0.0".to_string(),
                found: "1.0.1".to_string(),
            })
        });

        let result = verify(&mock, VersionPolicy::PerModule);
        assert!(matches!(result, Err(VersionError::Conflict { .. })));
    }

    #[test]
    fn current_version_returns_module_version() {
        let source = source(&[("ModA", "1.0.0"), ("ModB", "2.0.0")], &[], &[]);
        assert_eq!(current_version(&source, Some("ModB")).unwrap(), "2.0.0");
    }

    #[test]
    fn current_version_rejects_unknown_module() {
        let source = source(&[("ModA", "1.0.0")], &[], &[]);
        let result = current_version(&source, Some("ModZ"));
        assert!(matches!(result, Err(VersionError::UnknownModule(m)) if m == "ModZ"));
    }

    #[test]
    fn current_version_without_module_requires_uniform_versions() {
        let uniform = source(&[("ModA", "1.0.0"), ("ModB", "1.0.0")], &[], &[]);
        assert_eq!(current_version(&uniform, None).unwrap(), "1.0.0");

        let mixed = source(&[("ModA", "1.0.0"), ("ModB", "2.0.0")], &[], &[]);
        assert!(matches!(
            current_version(&mixed, None),
            Err(VersionError::NotUniform { .. })
        ));

        let empty = source(&[], &[], &[]);
        assert!(matches!(
            current_version(&empty, None),
            Err(VersionError::NoModules(ManifestKind::ProjectFile))
        ));
    }
}
