use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LicensePolicy;
use crate::manifest::Dependency;

/// 違反の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// 実効ライセンスが許可リストにマッチしない
    Forbidden,
    /// ライセンス識別子が解決できない
    Missing,
}

/// 違反の詳細情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub package_name: Option<String>,
    pub license: Option<String>,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    /// ビルドを中断させるエラーへ変換する
    pub fn into_error(self) -> CheckError {
        let package = self
            .package_name
            .unwrap_or_else(|| "<unknown>".to_string());

        match self.kind {
            ViolationKind::Forbidden => CheckError::ForbiddenLicense {
                license: self.license.unwrap_or_default(),
                package,
            },
            ViolationKind::Missing => CheckError::MissingLicense { package },
        }
    }
}

/// 違反のサマリー情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationSummary {
    pub total: usize,
    pub forbidden: usize,
    pub missing: usize,
    pub generated_at: DateTime<Utc>,
    pub details: Vec<Violation>,
}

/// ハードフェイル構成で発生する、ビルドを終了させるエラー
///
/// 禁止ライセンスと情報欠落は是正手段が異なるため別の種別として扱う
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    ForbiddenLicense { package: String, license: String },
    MissingLicense { package: String },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::ForbiddenLicense { package, license } => {
                write!(
                    f,
                    "Forbidden license '{}' found for package '{}'",
                    license, package
                )
            }
            CheckError::MissingLicense { package } => {
                write!(f, "Missing license for '{}'", package)
            }
        }
    }
}

impl std::error::Error for CheckError {}

impl LicensePolicy {
    /// 単一の依存を評価し、違反があれば返す
    pub fn evaluate(&self, dependency: &Dependency) -> Option<Violation> {
        if let Some(name) = dependency.name.as_deref() {
            if self.is_excluded(name) {
                return None;
            }
        }

        match self.resolve_license_type(dependency) {
            Some(license) if self.is_acceptable(license) => None,
            Some(license) => Some(Violation {
                package_name: dependency.name.clone(),
                license: Some(license.to_string()),
                kind: ViolationKind::Forbidden,
                message: format!("License '{}' is not acceptable for redistribution", license),
            }),
            None => Some(Violation {
                package_name: dependency.name.clone(),
                license: None,
                kind: ViolationKind::Missing,
                message: "No license information found".to_string(),
            }),
        }
    }

    /// 依存リストから違反を検出する
    pub fn detect_violations(&self, dependencies: &[Dependency]) -> ViolationSummary {
        let violations: Vec<Violation> = dependencies
            .iter()
            .filter_map(|dependency| self.evaluate(dependency))
            .collect();

        let forbidden = violations
            .iter()
            .filter(|v| v.kind == ViolationKind::Forbidden)
            .count();
        let missing = violations
            .iter()
            .filter(|v| v.kind == ViolationKind::Missing)
            .count();

        ViolationSummary {
            total: violations.len(),
            forbidden,
            missing,
            generated_at: Utc::now(),
            details: violations,
        }
    }
}
