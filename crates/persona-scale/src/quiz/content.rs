//! Descriptive copy the presentation layer looks up by result key.
//!
//! The built-in catalog covers every composable key; a JSON file with the same
//! shape can replace it, which is why lookups return `Option` and the sanity
//! checker exists.

use super::domain::{ChangeStance, CoreType, Interaction, Level, ValueFocus, Variant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid content catalog: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeProfile {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub scenarios: Vec<String>,
    #[serde(default)]
    pub growth: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantProfile {
    pub modifier: String,
    pub strength_phrase: String,
    pub growth_phrase: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionProfile {
    pub tagline: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisProfile {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelProfile {
    pub name: String,
    #[serde(default)]
    pub advice: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentCatalog {
    pub personality_types: BTreeMap<String, TypeProfile>,
    pub variants: BTreeMap<String, VariantProfile>,
    pub interactions: BTreeMap<String, InteractionProfile>,
    pub value_axes: BTreeMap<String, AxisProfile>,
    pub social_adaptability: BTreeMap<String, LevelProfile>,
    pub identity_clarity: BTreeMap<String, LevelProfile>,
}

impl ContentCatalog {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ContentError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn core_profile(&self, core: CoreType) -> Option<&TypeProfile> {
        self.personality_types.get(&core.key())
    }

    pub fn variant_profile(&self, variant: Variant) -> Option<&VariantProfile> {
        self.variants.get(variant.key())
    }

    pub fn interaction_profile(&self, interaction: Interaction) -> Option<&InteractionProfile> {
        self.interactions.get(interaction.key())
    }

    pub fn value_focus_profile(&self, focus: ValueFocus) -> Option<&AxisProfile> {
        self.value_axes.get(focus.key())
    }

    pub fn change_stance_profile(&self, stance: ChangeStance) -> Option<&AxisProfile> {
        self.value_axes.get(stance.key())
    }

    pub fn social_level(&self, level: Level) -> Option<&LevelProfile> {
        self.social_adaptability.get(level.label())
    }

    pub fn identity_level(&self, level: Level) -> Option<&LevelProfile> {
        self.identity_clarity.get(level.label())
    }

    pub fn standard() -> Self {
        Self {
            personality_types: standard_types(),
            variants: BTreeMap::from([
                (
                    "A".to_string(),
                    VariantProfile {
                        modifier: "穩健型".to_string(),
                        strength_phrase: "面對壓力時能維持情緒平穩,對自己的判斷有信心。".to_string(),
                        growth_phrase: "留意自信可能掩蓋的風險,定期邀請他人給予回饋。".to_string(),
                    },
                ),
                (
                    "T".to_string(),
                    VariantProfile {
                        modifier: "敏感型".to_string(),
                        strength_phrase: "對細節與他人反應敏銳,持續追求進步。".to_string(),
                        growth_phrase: "練習區分可控與不可控的事,為自己保留恢復的空間。".to_string(),
                    },
                ),
            ]),
            interactions: BTreeMap::from([
                (
                    "E".to_string(),
                    InteractionProfile {
                        tagline: "從互動中汲取能量,習慣邊說邊想。".to_string(),
                        bullets: strings(&[
                            "在團隊中常扮演帶動氣氛與推進討論的角色",
                            "透過對話快速整理想法",
                        ]),
                        growth_suggestion: Some(
                            "以每週的反思時間收斂行動步調,讓熱情更聚焦。".to_string(),
                        ),
                    },
                ),
                (
                    "I".to_string(),
                    InteractionProfile {
                        tagline: "從獨處中恢復能量,習慣想清楚再表達。".to_string(),
                        bullets: strings(&[
                            "偏好深入而有意義的交流",
                            "在安靜的環境中最能專注",
                        ]),
                        growth_suggestion: Some(
                            "安排定期的公開分享或協作任務,練習把洞見帶到外部。".to_string(),
                        ),
                    },
                ),
            ]),
            value_axes: BTreeMap::from([
                axis("ST", "自我超越", "你重視他人福祉與社會公平,願意為群體付出。"),
                axis("SE", "自我提升", "你重視成就與影響力,會主動爭取表現的舞台。"),
                axis("STSE_Balance", "利他與成就平衡", "你在照顧他人與追求個人成就之間保持彈性。"),
                axis("OP", "開放變化", "你追求新體驗與自主選擇,樂於擁抱改變。"),
                axis("CO", "保守穩定", "你重視安全、秩序與傳統,偏好可預期的環境。"),
                axis("OPCO_Balance", "變化與穩定平衡", "你能依情境在探索新事物與維持穩定之間切換。"),
            ]),
            social_adaptability: BTreeMap::from([
                level("高", "社會適應力高", &["善用你的適應力擔任跨團隊的橋樑"]),
                level("中", "社會適應力中等", &["在熟悉的場合中主動多嘗試一種新的互動方式"]),
                level("低", "社會適應力待發展", &["從小型、可預期的社交情境開始累積經驗"]),
            ]),
            identity_clarity: BTreeMap::from([
                level("高", "自我認同清晰", &["以清楚的價值觀作為決策的錨點"]),
                level("中", "自我認同發展中", &["記錄讓你感到投入的時刻,找出共同的價值"]),
                level("低", "自我認同探索中", &["給自己嘗試不同角色的機會,不必急於定義自己"]),
            ]),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn axis(key: &str, name: &str, description: &str) -> (String, AxisProfile) {
    (
        key.to_string(),
        AxisProfile {
            name: name.to_string(),
            description: description.to_string(),
        },
    )
}

fn level(key: &str, name: &str, advice: &[&str]) -> (String, LevelProfile) {
    (
        key.to_string(),
        LevelProfile {
            name: name.to_string(),
            advice: strings(advice),
        },
    )
}

fn standard_types() -> BTreeMap<String, TypeProfile> {
    let rows: [(&str, &str, &str, [&str; 3], [&str; 2], [&str; 3], [&str; 2]); 8] = [
        (
            "NTJ",
            "策略家",
            "以長遠眼光規劃方向,善於把複雜問題拆解成可執行的步驟。",
            ["系統性思考", "目標導向", "決策果斷"],
            ["容易忽略他人感受", "對低效率缺乏耐心"],
            ["策略規劃", "專案管理", "系統架構"],
            ["在推進計畫前先確認團隊的理解與感受", "為意外保留彈性空間"],
        ),
        (
            "NTP",
            "探索者",
            "熱愛概念與理論,喜歡從不同角度挑戰既有假設。",
            ["創新思維", "邏輯分析", "快速學習"],
            ["容易三分鐘熱度", "忽略執行細節"],
            ["研究開發", "產品設計", "顧問分析"],
            ["為點子設定具體的驗證步驟", "與重視執行的夥伴合作"],
        ),
        (
            "NFJ",
            "引導者",
            "關注人的成長與潛能,善於凝聚共識並帶領方向。",
            ["同理洞察", "溝通感染力", "價值堅持"],
            ["過度承擔他人期待", "不易拒絕"],
            ["教育培訓", "組織發展", "諮詢輔導"],
            ["練習設立界線", "把自己的需求也列入優先順序"],
        ),
        (
            "NFP",
            "理想家",
            "重視真誠與意義,擁有豐富的想像力與內在價值。",
            ["創意表達", "包容開放", "重視真誠"],
            ["容易理想化", "面對衝突時傾向迴避"],
            ["寫作創作", "社會工作", "品牌內容"],
            ["把理想拆成每週可完成的小行動", "練習直接表達不同意見"],
        ),
        (
            "STJ",
            "守護者",
            "可靠且重視責任,擅長建立制度並確保事情如期完成。",
            ["組織能力", "責任感", "注重細節"],
            ["對變化較為保守", "標準過於嚴格"],
            ["營運管理", "財務會計", "品質控管"],
            ["嘗試以實驗心態接受新做法", "在要求他人前先了解其處境"],
        ),
        (
            "STP",
            "實踐家",
            "冷靜務實,善於在現場快速判斷並解決實際問題。",
            ["臨場應變", "動手能力", "客觀冷靜"],
            ["不喜歡長期規劃", "容易忽略情感訊號"],
            ["工程技術", "危機處理", "業務開發"],
            ["為重要目標設定中長期里程碑", "在解決問題後多關心相關的人"],
        ),
        (
            "SFJ",
            "照護者",
            "溫暖且周到,重視團體的和諧與每個人的需求。",
            ["體貼細心", "可靠穩定", "善於協調"],
            ["過度在意他人評價", "忽略自身需求"],
            ["醫療照護", "人力資源", "客戶服務"],
            ["把「不」當成完整的回答", "定期檢視自己的能量狀態"],
        ),
        (
            "SFP",
            "藝術家",
            "活在當下,以敏銳的感官體驗世界並表達自我。",
            ["美感敏銳", "隨和友善", "彈性適應"],
            ["不擅長長期規劃", "面對批評容易受傷"],
            ["設計創作", "餐飲旅遊", "照護服務"],
            ["為興趣建立固定的練習節奏", "把回饋視為作品的一部分"],
        ),
    ];

    rows.into_iter()
        .map(
            |(key, name, summary, strengths, weaknesses, scenarios, growth)| {
                (
                    key.to_string(),
                    TypeProfile {
                        name: name.to_string(),
                        summary: summary.to_string(),
                        strengths: strings(&strengths),
                        weaknesses: strings(&weaknesses),
                        scenarios: strings(&scenarios),
                        growth: strings(&growth),
                    },
                )
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_resolves_every_result_key() {
        let content = ContentCatalog::standard();
        for core in CoreType::all() {
            assert!(content.core_profile(core).is_some(), "missing {core}");
        }
        for variant in Variant::ordered() {
            assert!(content.variant_profile(variant).is_some());
        }
        for interaction in Interaction::ordered() {
            assert!(content.interaction_profile(interaction).is_some());
        }
        for level in Level::ordered() {
            assert!(content.social_level(level).is_some());
            assert!(content.identity_level(level).is_some());
        }
        for focus in ValueFocus::ordered() {
            assert!(content.value_focus_profile(focus).is_some());
        }
        for stance in ChangeStance::ordered() {
            assert!(content.change_stance_profile(stance).is_some());
        }
    }

    #[test]
    fn partial_json_catalog_loads_with_empty_sections() {
        let json = r#"{
            "personality_types": {
                "NTJ": { "name": "策略家", "summary": "s" }
            }
        }"#;
        let content = ContentCatalog::from_reader(json.as_bytes()).expect("parses");
        assert_eq!(content.personality_types.len(), 1);
        assert!(content.variants.is_empty());
        let profile = content.personality_types.get("NTJ").expect("entry");
        assert!(profile.strengths.is_empty());
    }

    #[test]
    fn from_path_reports_missing_file() {
        let error = ContentCatalog::from_path("./no-such-content.json").expect_err("io error");
        assert!(matches!(error, ContentError::Io { .. }));
    }
}
