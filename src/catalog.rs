use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use rand::Rng;

use crate::utils::{LoremError, Result, TERMINATOR};

/// Built-in word list: frequently used Simplified Chinese characters
pub const WORD_LIST: &str = concat!(
    "的一是不了人我在有他这中大来上国个到说们为子和你地出道也时年",
    "得就那要下以生会自着去之过家学对可她里后小么心多天而能好都然没",
    "日于起还发成事只作当想看文无开手十用主行方又如前所本见经头面公",
    "同三已老从动两长知民样现分将外但身些与高意进把法此实回二理美点",
    "月明其种声全工己话儿者向情部正名定女问力机给等几很业最间新什打",
    "便位因重被走电四第门相次东政海口使教西再平真听世气信北少关并内",
    "加化由却代军产入先山五太水万市眼体别处总才场师书比住员九笑性通",
    "目华报立马命张活难神数件安表原车白应路期叫死常提感金何更反合放",
    "做系计或司利受光王果亲界及今京务制解各任至清物台象记边共风战干",
    "接它许八特觉望直服毛林题建南度统色字请交爱让认算论百吃义科怎元",
    "社术结六功指思非流每青管夫连远资队跟带花快条院变联言权往展该领",
    "传近留红治决周保达办运武半候七必城父强步完革深区即求品士转量空",
    "甚众技轻程告江语英基派满式李息写呢识极令黄德收脸钱党倒未持音跑",
    "投注则取呀片土易支火示专节读阳热仅友河飞叶育切研岁",
    "号改星拉底怕单落图际整局石念草随乐站找农济价调纪树存类校究",
    "格斯推破府选参喜阿响较导据引夜船讲照复观朝房刻具广影需群医",
    "显古哪欢首谈雨集阵历病组装帮始母刚造足差脚养商证形包层布越",
    "亚衣细送修演欧争游准云低谁席史维官况角早态愿继爷虽顾约议线",
    "器采型积微严县置标乡福季春秋冬夏晚午暖冷温湿湖岸桥园竹松",
    "梅兰菊荷鸟鱼虫兽龙虎牛羊猫狗鸡鸭鹅燕雁鹤雾霜雪冰露雷辰晨暮",
);

static BUILTIN: LazyLock<Arc<WordCatalog>> = LazyLock::new(|| {
    Arc::new(WordCatalog::from_chars(WORD_LIST).expect("built-in word list is valid"))
});

/// An ordered, immutable set of single-character entries used as
/// generation primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    entries: Vec<String>,
}

impl WordCatalog {
    /// Build a catalog from explicit entries.
    ///
    /// Each entry must be exactly one character, must not be whitespace and
    /// must not be the terminator. Duplicates are dropped, keeping the first
    /// occurrence.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();

        for entry in entries {
            let entry = entry.into();
            let mut chars = entry.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(LoremError::InvalidCatalog(format!(
                        "entry {:?} must be exactly one character",
                        entry
                    )));
                }
            };
            if c.is_whitespace() || c == TERMINATOR {
                return Err(LoremError::InvalidCatalog(format!(
                    "entry {:?} is not allowed",
                    entry
                )));
            }
            if seen.insert(c) {
                unique.push(entry);
            }
        }

        if unique.is_empty() {
            return Err(LoremError::InvalidCatalog(
                "catalog must contain at least one entry".to_string(),
            ));
        }

        Ok(WordCatalog { entries: unique })
    }

    /// Build a catalog with one entry per character of `chars`
    pub fn from_chars(chars: &str) -> Result<Self> {
        Self::new(chars.chars().map(String::from))
    }

    /// The shared built-in catalog
    pub fn builtin() -> Arc<WordCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Pick one entry uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.entries[rng.gen_range(0..self.entries.len())]
    }

    /// Check whether `entry` belongs to the catalog
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    /// Check that every character of `text` is a catalog entry
    pub fn is_composed_of(&self, text: &str) -> bool {
        let mut buf = [0u8; 4];
        text.chars().all(|c| self.contains(c.encode_utf8(&mut buf)))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        BUILTIN.as_ref().clone()
    }
}
