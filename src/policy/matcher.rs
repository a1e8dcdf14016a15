use serde::{Deserialize, Serialize};

/// 許可ライセンスのルール: 前方一致または完全一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseRule {
    /// ライセンス識別子（または識別子の接頭辞）
    pub name: String,
    /// trueの場合は完全一致のみ
    #[serde(default)]
    pub exact: bool,
}

impl LicenseRule {
    pub fn new(name: &str, exact: bool) -> Self {
        Self {
            name: name.to_string(),
            exact,
        }
    }

    /// ライセンス識別子がこのルールにマッチするかチェック
    pub fn matches(&self, license: &str) -> bool {
        if self.exact {
            self.name == license
        } else {
            license.starts_with(&self.name)
        }
    }
}

/// 再配布が許可されるライセンスの固定リスト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptableLicenses {
    rules: Vec<LicenseRule>,
}

impl Default for AcceptableLicenses {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AcceptableLicenses {
    /// 組み込みの許可リスト
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                LicenseRule::new("AFL", false),
                LicenseRule::new("Apache", false),
                LicenseRule::new("0BSD", true),
                LicenseRule::new("BSD", false),
                LicenseRule::new("CC0", false),
                LicenseRule::new("CC-BY-3.0", false),
                LicenseRule::new("CC-BY-4.0", false),
                LicenseRule::new("ISC", false),
                LicenseRule::new("MIT", false),
                LicenseRule::new("MS-PL", false),
                LicenseRule::new("W3C", true),
                LicenseRule::new("WTFPL", false),
            ],
        }
    }

    /// ライセンス識別子が許可リストにマッチするかチェック
    pub fn is_acceptable(&self, license: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(license))
    }

    /// マッチしたルールを返す
    pub fn find_match(&self, license: &str) -> Option<&LicenseRule> {
        self.rules.iter().find(|rule| rule.matches(license))
    }
}
