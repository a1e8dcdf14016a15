pub mod checker;
pub mod matcher;
pub mod overrides;

// Re-export main types
pub use checker::{CheckError, Violation, ViolationKind, ViolationSummary};
pub use matcher::{AcceptableLicenses, LicenseRule};

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::config::AuditConfig;
use crate::manifest::Dependency;
use overrides::{
    builtin_excluded_packages, builtin_license_texts, builtin_license_types, merge_overrides,
};

/// マージ済みのテーブル一式。ビルド構成ごとに一度だけ構築し、以後は不変
#[derive(Debug, Clone)]
pub struct LicensePolicy {
    acceptable: AcceptableLicenses,
    license_overrides: IndexMap<String, String>,
    license_text_overrides: IndexMap<String, String>,
    excluded_packages: BTreeSet<String>,
}

impl LicensePolicy {
    /// 組み込みテーブルと呼び出し側の設定からポリシーを構築する
    pub fn from_config(config: &AuditConfig) -> Self {
        let excluded_packages = builtin_excluded_packages()
            .iter()
            .map(|name| name.to_string())
            .chain(config.additional_excluded_packages.iter().cloned())
            .collect();

        Self {
            acceptable: AcceptableLicenses::builtin(),
            license_overrides: merge_overrides(
                builtin_license_types(),
                &config.additional_known_licenses,
            ),
            license_text_overrides: merge_overrides(
                builtin_license_texts(),
                &config.additional_known_license_texts,
            ),
            excluded_packages,
        }
    }

    /// 上書きテーブル→自己申告値の順で解決する
    ///
    /// 種別と本文の両方がここを通る。名前のない依存は解決できない
    fn resolve_with_fallback<'a>(
        name: Option<&str>,
        overrides: &'a IndexMap<String, String>,
        declared: Option<&'a str>,
    ) -> Option<&'a str> {
        let name = name?;
        overrides.get(name).map(String::as_str).or(declared)
    }

    /// 依存の実効ライセンス種別
    pub fn resolve_license_type<'a>(&'a self, dependency: &'a Dependency) -> Option<&'a str> {
        Self::resolve_with_fallback(
            dependency.name.as_deref(),
            &self.license_overrides,
            dependency.license.as_deref(),
        )
    }

    /// 依存の実効ライセンス本文
    pub fn resolve_license_text<'a>(&'a self, dependency: &'a Dependency) -> Option<&'a str> {
        Self::resolve_with_fallback(
            dependency.name.as_deref(),
            &self.license_text_overrides,
            dependency.license_text.as_deref(),
        )
    }

    /// パッケージが除外リストに含まれているかチェック
    pub fn is_excluded(&self, package_name: &str) -> bool {
        self.excluded_packages.contains(package_name)
    }

    /// ライセンス識別子が許可リストにマッチするかチェック
    pub fn is_acceptable(&self, license: &str) -> bool {
        self.acceptable.is_acceptable(license)
    }

    /// 依存を受け入れるかどうか。除外パッケージは無条件で許可
    pub fn allow(&self, dependency: &Dependency) -> bool {
        if let Some(name) = dependency.name.as_deref() {
            if self.excluded_packages.contains(name) {
                return true;
            }
        }

        match self.resolve_license_type(dependency) {
            Some(license) => self.is_acceptable(license),
            None => false,
        }
    }
}
