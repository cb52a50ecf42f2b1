//! The sixteen personality profiles and the code that indexes them.
//!
//! A [`PersonalityCode`] is four poles, one per dimension. It maps onto
//! `0..16` with one bit per dimension (horizon most significant, negative
//! pole = 1), so the profile table is a plain array and lookup cannot miss.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;
use crate::model::{Dimension, Pole};

/// Number of distinct personality codes.
pub const PROFILE_COUNT: usize = 16;

/// Four trait letters identifying one profile, e.g. `FEMI`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonalityCode {
    poles: [Pole; 4],
}

impl PersonalityCode {
    /// Build a code from poles given in dimension order.
    pub fn new(poles: [Pole; 4]) -> Self {
        Self { poles }
    }

    pub fn pole(&self, dimension: Dimension) -> Pole {
        self.poles[dimension.index()]
    }

    pub fn poles(&self) -> [Pole; 4] {
        self.poles
    }

    /// Position in the profile table.
    pub fn index(&self) -> usize {
        self.poles.iter().fold(0, |acc, pole| {
            (acc << 1)
                | match pole {
                    Pole::Positive => 0,
                    Pole::Negative => 1,
                }
        })
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= PROFILE_COUNT {
            return None;
        }
        let mut poles = [Pole::Positive; 4];
        for (i, pole) in poles.iter_mut().enumerate() {
            if index & (1 << (3 - i)) != 0 {
                *pole = Pole::Negative;
            }
        }
        Some(Self { poles })
    }

    /// All sixteen codes in table order.
    pub fn all() -> impl Iterator<Item = PersonalityCode> {
        (0..PROFILE_COUNT).filter_map(PersonalityCode::from_index)
    }

    pub fn letters(&self) -> [char; 4] {
        let mut letters = [' '; 4];
        for d in Dimension::ALL {
            letters[d.index()] = d.letter(self.pole(d));
        }
        letters
    }

    pub fn profile(&self) -> &'static PersonalityProfile {
        &PROFILES[self.index()]
    }
}

impl fmt::Display for PersonalityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for PersonalityCode {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() != Dimension::ALL.len() {
            return Err(AssessmentError::UnknownCode(trimmed.to_string()));
        }

        let mut poles = [Pole::Positive; 4];
        for d in Dimension::ALL {
            poles[d.index()] = d
                .pole_for_letter(chars[d.index()])
                .ok_or_else(|| AssessmentError::UnknownCode(trimmed.to_string()))?;
        }
        Ok(Self { poles })
    }
}

impl TryFrom<String> for PersonalityCode {
    type Error = AssessmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PersonalityCode> for String {
    fn from(code: PersonalityCode) -> Self {
        code.to_string()
    }
}

/// Static description of one personality type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalityProfile {
    pub title: &'static str,
    pub english_title: &'static str,
    pub description: &'static str,
    pub strengths: &'static str,
    pub needs: &'static str,
    /// Recommended partner, written as `[CODE] title，...`.
    pub advice: &'static str,
}

impl PersonalityProfile {
    /// The partner code named at the start of [`PersonalityProfile::advice`].
    pub fn partner(&self) -> Option<PersonalityCode> {
        let rest = self.advice.strip_prefix('[')?;
        let (code, _) = rest.split_once(']')?;
        code.parse().ok()
    }

    /// `title (english_title)`, as shown on the result card.
    pub fn display_title(&self) -> String {
        format!("{} ({})", self.title, self.english_title)
    }
}

/// Look up the profile for a code.
pub fn profile(code: PersonalityCode) -> &'static PersonalityProfile {
    code.profile()
}

/// Profile table indexed by [`PersonalityCode::index`].
pub static PROFILES: [PersonalityProfile; PROFILE_COUNT] = [
    // FPMR
    PersonalityProfile {
        title: "理论先知",
        english_title: "Theoretical Prophet",
        description: "你是思想的源头，痴迷于用最优雅的公理构建整个世界的解释体系。你追求的是\"思想钢印\"，渴望提出一个能流传数十年的理论范式。",
        strengths: "极强的抽象思维，能洞察万物背后的第一性原理，提出颠覆性的世界观。",
        needs: "你的理论可能过于超前，以至于找不到合适的数据和算力来验证；容易陷入\"思想的空中楼阁\"。",
        advice: "[AEDI] 屠榜工程师，TA能将你的理论翻译成代码，并用数据填满你模型的血肉。",
    },
    // FPMI
    PersonalityProfile {
        title: "理论架构师",
        english_title: "Theory Architect",
        description: "你是理论大厦的建造师。你认同现有的基础理论，但致力于用更精巧、更完备的数学和模型框架将其系统化，并小步快跑地验证。",
        strengths: "逻辑严谨，体系化思考能力强，能将零散的理论构件搭建成坚固、优美的体系。",
        needs: "可能过于执着于理论的\"完备性\"，导致进展缓慢；对那些\"不讲道理\"的实验现象接受度低。",
        advice: "[FEDR] 规律发现者，TA能为你带来意想不到的、挑战你理论框架的\"野路子\"数据和现象。",
    },
    // FPDR
    PersonalityProfile {
        title: "数据考古学家",
        english_title: "Data Archaeologist",
        description: "你相信宏大的理论真理隐藏在数据的细节中。你致力于提出全新的理论假设，并像考古学家一样，设计革命性的方法去挖掘和解释数据，以验证你的猜想。",
        strengths: "兼具理论洞察和数据直觉，擅长从平凡数据中挖掘出不凡的理论意义。",
        needs: "你宏大的理论和新颖的数据方法可能都过于非主流，导致两头不靠岸，难以获得学界认同。",
        advice: "[APMI] 第一性原理工程师，TA能欣赏你的理论深度，并将其工程化。",
    },
    // FPDI
    PersonalityProfile {
        title: "白盒工匠",
        english_title: "White Box Artisan",
        description: "你是理论的\"手艺人\"，坚信好的理论必须在高质量数据上得到精密的验证。你致力于在现有理论框架下，用最严谨的数据工作来打磨理论的每一个细节。",
        strengths: "极度严谨和耐心，能做出\"教科书级别\"的理论验证和数据集构建工作。",
        needs: "容易陷入对细节的过度追求，可能缺乏对更大图景的想象力。",
        advice: "[AEMR] 性能爆破手，TA的大胆尝试能帮你打破思维定势。",
    },
    // FEMR
    PersonalityProfile {
        title: "黑箱艺术家",
        english_title: "Black Box Artist",
        description: "你是AI领域的\"行为艺术家\"，不拘泥于理论，坚信通过创造全新的、强大的模型（黑箱），就能激发数据涌现出前所未见的智能，从而拓展我们对世界的认知。",
        strengths: "想象力天马行空，模型设计的\"品味\"极佳，总能创造出令人惊艳的AI能力。",
        needs: "你的工作可能难以解释和复现，有时会被批评为\"炼金术\"或\"撞大运\"。",
        advice: "[APDI] 精密仪器工程师，TA能帮你把\"艺术品\"变成可靠的\"仪器\"。",
    },
    // FEMI
    PersonalityProfile {
        title: "炼丹宗师",
        english_title: "Alchemy Grandmaster",
        description: "你是经验主义的集大成者。你站在当前最强模型（SOTA）的肩膀上，通过海量的实验和精湛的调参技艺，持续探索模型能力的边界，并从中总结出新的规律。",
        strengths: "直觉超强，动手能力极快，是\"大力出奇迹\"和\"涌现\"现象的敏锐捕捉者。",
        needs: "可能会陷入无尽的\"炼丹\"循环，对\"为什么work\"缺乏深究的动力。",
        advice: "[FPMI] 理论架构师，TA能帮你为你的\"丹方\"找到理论依据，知其所以然。",
    },
    // FEDR
    PersonalityProfile {
        title: "规律发现者",
        english_title: "Pattern Discoverer",
        description: "你是数据中的哥伦bus，坚信新大陆就藏在海量数据中。你痴迷于发明全新的数据分析和可视化方法，从看似混乱的数据中发现颠覆性的、全新的科学规律。",
        strengths: "对数据模式极度敏感，擅长\"无监督\"学习，能从噪声中识别出信号。",
        needs: "发现的\"新规律\"可能只是相关性而非因果性，需要更强的理论框架来支撑。",
        advice: "[FPDI] 白盒工匠，TA能帮你用严谨的理论和实验设计来验证你的发现。",
    },
    // FEDI
    PersonalityProfile {
        title: "数据博物学家",
        english_title: "Data Naturalist",
        description: "你像达尔文一样，通过对现有数据的精心收集、分类和迭代分析，来揭示世界运行的深层规律。你相信知识来自于对数据的耐心观察和归纳。",
        strengths: "细致入微，有极强的归纳和总结能力，能构建出领域内最全面的\"知识图谱\"或数据集。",
        needs: "你的工作可能被视为\"脏活累活\"，新颖性不足，价值需要长时间才能显现。",
        advice: "[FEMR] 黑箱艺术家，TA能利用你的高质量数据创造出惊人的模型。",
    },
    // APMR
    PersonalityProfile {
        title: "降维打击者",
        english_title: "Dimensionality Striker",
        description: "你是解决应用难题的\"破壁人\"。你擅长用深刻的理论洞察力，找到一个现有问题的\"七寸\"，并提出一个基于全新原理的、跨维度的解决方案，一举攻克。",
        strengths: "能精准定位问题核心，提出\"思路清奇\"的降维打击方案。",
        needs: "你的革命性方案可能过于理想化，忽视了现实世界中数据的复杂性和工程的约束。",
        advice: "[AEDI] 屠榜工程师，TA是最好的\"陪练\"，能用海量数据和实验来检验你方案的每一个细节。",
    },
    // APMI
    PersonalityProfile {
        title: "第一性原理工程师",
        english_title: "First-Principle Engineer",
        description: "你是工程师中的哲学家，坚信最好的工程实践一定源于清晰的理论。你致力于将第一性原理应用到现有模型和系统中，进行持续、深入的优化。",
        strengths: "基础极其扎实，能做出鲁棒性极强、可解释性极高的系统。",
        needs: "有时可能过于\"学院派\"，对工业界一些\"野路子\"但有效的方法不够开放。",
        advice: "[AEMI] 调参魔导士，TA能告诉你很多\"不讲武德\"但超好用的tricks。",
    },
    // APDR
    PersonalityProfile {
        title: "代码魔术师",
        english_title: "Code Magician",
        description: "你是理论的实践者，致力于用全新的数据处理和工程范式来解决现实问题。你可能发明一种新的数据结构或编程框架，从根本上改变某个应用领域的开发效率。",
        strengths: "兼具理论深度和编程能力，能创造出优雅而高效的工具，赋能他人。",
        needs: "你的\"轮子\"可能过于超前，社区和用户需要很长时间才能理解和接受。",
        advice: "[AEDI] 屠榜工程师，TA会是你新工具的\"天使用户\"和\"压力测试员\"。",
    },
    // APDI
    PersonalityProfile {
        title: "精密仪器工程师",
        english_title: "Precision Instrument Engineer",
        description: "你是可靠性的化身。你相信理论和数据的完美结合，致力于用最严谨的工程方法，打造出稳定、精确、可信赖的AI系统，像制造一台精密仪器一样。",
        strengths: "极度注重细节和质量，是项目中\"兜底\"和\"擦屁股\"的最佳人选。",
        needs: "可能因为追求完美而牺牲了速度，有时在快速变化的市场或研究前沿中会错失良机。",
        advice: "[AEMR] 性能爆破手，TA能推动你更快地发布和迭代。",
    },
    // AEMR
    PersonalityProfile {
        title: "性能爆破手",
        english_title: "Performance Blaster",
        description: "你是效果的\"猛士\"，为了解决一个实际问题，你会毫不犹豫地祭出最大、最新、最暴力的模型，用\"饱和式攻击\"来炸出最佳性能。",
        strengths: "行动力极强，对新技术极其敏锐，总能用最\"潮\"的方法快速拿到惊艳的结果。",
        needs: "解决方案可能成本高昂、难以维护，且对背后的原理不求甚解，是\"一把梭哈\"的赌徒。",
        advice: "[APMI] 第一性原理工程师，TA能帮你把\"大力出奇迹\"变得更可持续、更可控。",
    },
    // AEMI
    PersonalityProfile {
        title: "调参魔导士",
        english_title: "Hyperparameter Wizard",
        description: "你是应用效果的\"魔法师\"，对现有模型和系统的每一个角落都了如指掌。你通过精妙的实验设计和大量的\"黑话\"tricks，将模型的性能调至毫厘之间的极限。",
        strengths: "经验丰富，有超凡的耐心和直觉，是提升项目效果最后1%的关键先生/女士。",
        needs: "容易陷入调参的\"玄学\"中，有时会忽视更底层的模型或数据问题。",
        advice: "[APDR] 代码魔术师，TA可能会给你一个全新的工具，让你不再需要手动调参。",
    },
    // AEDR
    PersonalityProfile {
        title: "增长黑客",
        english_title: "Growth Hacker",
        description: "你是价值发现的\"黑客\"，坚信数据中蕴藏着解决问题的捷径。你擅长用创造性的、非常规的数据获取和利用方法，来快速、颠覆性地提升一个应用指标。",
        strengths: "思维活跃，不拘一格，总能找到\"四两拨千斤\"的数据杠杆点。",
        needs: "方法可能游走在\"灰色地带\"，有时为了短期增长会牺牲长期价值或用户体验。",
        advice: "[APDI] 精密仪器工程师，TA能帮你建立更稳健、更长期的价值评估体系。",
    },
    // AEDI
    PersonalityProfile {
        title: "屠榜工程师",
        english_title: "Benchmark Slayer",
        description: "你是公认赛道上的\"王者\"，是严谨和务实的代名词。你致力于在明确的规则（benchmark）下，通过精细的数据工程和持续的迭代优化，将系统性能做到极致。",
        strengths: "极其严谨、专注和有毅力，能交付稳定、高效、可复现的SOTA结果。",
        needs: "可能过于专注\"刷分\"，对榜单本身是否合理、问题定义是否过时不够敏感。",
        advice: "[FPMR] 理论先知，TA会告诉你，也许是时候换个游戏玩了。",
    },
];
