use indexmap::IndexMap;

/// GitHubリポジトリ上のライセンスファイルへのポインタ文字列を生成する
fn see_on_github(repo: &str, file: &str) -> String {
    format!(
        "See the license at: https://github.com/{}/blob/master/{}",
        repo, file
    )
}

/// ライセンス種別の組み込み修正テーブル
///
/// パッケージ自身のメタデータが誤っているか欠落している既知のケースのみ
pub fn builtin_license_types() -> IndexMap<String, String> {
    let mut types = IndexMap::new();

    // MPL-2.0 / Apache-2.0 のデュアルライセンス。Apache-2.0 側を採用する
    types.insert("dompurify".to_string(), "Apache-2.0".to_string());

    // リポジトリにはMITライセンスがあるが package.json に license 欄がない
    types.insert("decko".to_string(), "MIT".to_string());
    types.insert("stickyfill".to_string(), "MIT".to_string());

    types
}

/// ライセンス本文の組み込みフォールバックテーブル
///
/// 配布物にライセンス本文が同梱されていないパッケージを、リポジトリ上の
/// 正規のファイルへのポインタで補う。過去の監査結果をそのまま保持している
pub fn builtin_license_texts() -> IndexMap<String, String> {
    let mut texts = IndexMap::new();

    texts.insert(
        "imurmurhash".to_string(),
        see_on_github("jensyt/imurmurhash-js", "LICENSE"),
    );
    texts.insert(
        "is-in-browser".to_string(),
        see_on_github("tuxsudo/is-in-browser", "LICENSE"),
    );
    texts.insert(
        "theming".to_string(),
        see_on_github("cssinjs/theming", "README.md"),
    );
    texts.insert(
        "@emotion/memoize".to_string(),
        see_on_github("emotion-js/emotion", "packages/memoize/LICENSE"),
    );
    texts.insert(
        "@emotion/is-prop-valid".to_string(),
        see_on_github("emotion-js/emotion", "packages/is-prop-valid/LICENSE"),
    );
    texts.insert(
        "react-number-format".to_string(),
        see_on_github("s-yadav/react-number-format", "MIT-LICENSE.txt"),
    );
    texts.insert(
        "html-parse-stringify2".to_string(),
        see_on_github("locize/html-parse-stringify2", "README.md"),
    );
    texts.insert(
        "redux-batched-subscribe".to_string(),
        see_on_github("tappleby/redux-batched-subscribe", "LICENSE"),
    );
    texts.insert(
        "redux-devtools-extension".to_string(),
        see_on_github("zalmoxisus/redux-devtools-extension", "LICENSE"),
    );
    texts.insert(
        "@microsoft/signalr".to_string(),
        see_on_github("dotnet/aspnetcore", "LICENSE.txt"),
    );
    texts.insert(
        "isarray".to_string(),
        see_on_github("juliangruber/isarray", "LICENSE"),
    );
    texts.insert(
        "popper.js".to_string(),
        see_on_github("popperjs/popper-core", "LICENSE.md"),
    );
    texts.insert(
        "react-select".to_string(),
        see_on_github("JedWatson/react-select", "LICENSE"),
    );
    texts.insert(
        "toggle-selection".to_string(),
        see_on_github("sudodoki/toggle-selection", "LICENSE"),
    );
    texts.insert(
        "styled-components".to_string(),
        see_on_github("styled-components/styled-components", "LICENSE"),
    );
    texts.insert(
        "@redocly/react-dropdown-aria".to_string(),
        see_on_github("Redocly/react-dropdown-aria", "LICENSE.md"),
    );

    // ライセンス自体はMITと明記されているが本文がREADMEにしかない。
    // 作者は活動を停止している様子
    texts.insert(
        "raf-schd".to_string(),
        see_on_github("alexreardon/raf-schd", "README.md"),
    );

    texts
}

/// 商用ライセンス契約の下で利用しているため監査対象から除外するパッケージ
pub fn builtin_excluded_packages() -> &'static [&'static str] {
    &[
        "devextreme",
        "@devexpress/dx-core",
        "@devexpress/dx-grid-core",
        "@devexpress/dx-react-core",
        "@devexpress/dx-react-grid",
        "@devexpress/dx-react-grid-material-ui",
        "devexpress-gantt",
    ]
}

/// 組み込みテーブルに呼び出し側のエントリをマージする
///
/// キーが衝突した場合は呼び出し側のエントリが勝つ
pub fn merge_overrides(
    builtin: IndexMap<String, String>,
    additional: &IndexMap<String, String>,
) -> IndexMap<String, String> {
    let mut merged = builtin;
    for (name, value) in additional {
        merged.insert(name.clone(), value.clone());
    }
    merged
}
