//! The static question corpus.
//!
//! Forty forced-choice questions, ten per dimension, in dimension order.
//! Option A always leans toward the dimension's positive pole.

use crate::model::{Dimension, Question};

/// Number of questions asked per dimension.
pub const QUESTIONS_PER_DIMENSION: usize = 10;

/// Every question, unshuffled.
pub static CORPUS: [Question; 40] = [
    Question {
        dimension: Dimension::Horizon,
        prompt: "在选择一个新课题时，哪种情况更能点燃你的热情？",
        option_a: "探索一个尚无公认范式、需要从零构建评测体系的AI新方向。",
        option_b: "在一个有明确评估标准的赛道上，解决一个关键的现实难题。",
    },
    Question {
        dimension: Dimension::Horizon,
        prompt: "你认为更有价值的科研遗产是？",
        option_a: "提出一个极具启发性的全新概念，为领域开辟了新的探索路径。",
        option_b: "打造一个被广泛采用的高效系统，显著提升了任务解决效率。",
    },
    Question {
        dimension: Dimension::Horizon,
        prompt: "在规划你的博士生涯时，你更倾向于？",
        option_a: "追随一个宏大而长远的目标，接受毕业前产出不确定的风险。",
        option_b: "将课题分解为一系列目标明确的子项目，确保每年都有稳定产出。",
    },
    Question {
        dimension: Dimension::Horizon,
        prompt: "什么样的成果更能给你带来成就感？",
        option_a: "你的论文因其思想的颠覆性，在十年后依然被人们讨论和引用。",
        option_b: "你的代码库在GitHub上获得数千星标，并被集成到主流框架中。",
    },
    Question {
        dimension: Dimension::Horizon,
        prompt: "你更享受科研的哪个阶段？",
        option_a: "项目初期，自由探索不同领域的交叉思想，构思一个全新的解题框架。",
        option_b: "项目后期，围绕明确的性能指标进行精细调优，享受数字稳步提升的快乐。",
    },
    Question {
        dimension: Dimension::Horizon,
        prompt: "在顶级会议上，你更愿意花时间听哪类报告？",
        option_a: "探讨AI未来方向与社会影响的\"大图景\"主题演讲 (Keynote)。",
        option_b: "深入剖析某个具体任务最前沿技术的论文分享 (Oral)。",
    },
    Question {
        dimension: Dimension::Horizon,
        prompt: "你认为什么样的导师更值得追随？",
        option_a: "一位思想深邃的\"哲学家\"，能引导你思考领域的终极问题。",
        option_b: "一位人脉广博的\"实干家\"，能为你对接前沿的工业界资源。",
    },
    Question {
        dimension: Dimension::Horizon,
        prompt: "你定义\"科研影响力\"的方式更接近？",
        option_a: "思想的传播范围和持久度，即\"启发了多少人\"。",
        option_b: "技术的应用广度和深度，即\"帮助了多少人\"。",
    },
    Question {
        dimension: Dimension::Horizon,
        prompt: "如果让你负责一笔科研经费，你会优先投给？",
        option_a: "支持通用人工智能（AGI）基础理论的探索性项目。",
        option_b: "资助利用现有AI技术解决具体社会问题的应用项目。",
    },
    Question {
        dimension: Dimension::Horizon,
        prompt: "阅读文献时，哪种类型的论文更让你兴奋？",
        option_a: "提出一个全新任务或评估维度的\"开山之作\" (Position Paper)。",
        option_b: "在一个竞争激烈的榜单上取得第一名的\"屠榜之作\" (SOTA Paper)。",
    },
    Question {
        dimension: Dimension::Paradigm,
        prompt: "当一个新模型效果很好但机理不明时，你的好奇心更倾向于？",
        option_a: "\"它为什么能行？\"——我会优先去寻找或构建一个能解释其内在机理的框架。",
        option_b: "\"它究竟能行多远？\"——我会优先设计实验去量化其性能和应用边界。",
    },
    Question {
        dimension: Dimension::Paradigm,
        prompt: "你更倾向于哪种科研起点？",
        option_a: "从一个关于智能的根本性假设出发，设计模型来验证它。",
        option_b: "从一个有趣的数据集或现象出发，通过实验让解决方案\"涌现\"。",
    },
    Question {
        dimension: Dimension::Paradigm,
        prompt: "当实验结果与你的核心假设相悖时，你的第一反应是？",
        option_a: "倾向于首先审视实验的有效性，设计对照实验来排除潜在干扰。",
        option_b: "相信这是一个惊喜的发现，它揭示了认知盲点，并立即着手探索。",
    },
    Question {
        dimension: Dimension::Paradigm,
        prompt: "在评价一篇论文时，你认为它的\"根基\"在于？",
        option_a: "其核心思想的深度与启发性，以及逻辑框架的清晰度。",
        option_b: "其经验证据的坚实程度，包括实验的严谨性与可复现性。",
    },
    Question {
        dimension: Dimension::Paradigm,
        prompt: "当你进入一个陌生的AI子领域时，你倾向于如何\"破冰\"？",
        option_a: "先通读奠基性论文和综述，从宏观上理解领域的核心原理。",
        option_b: "先跑一个经典的开源项目，通过修改代码来快速建立直观感受。",
    },
    Question {
        dimension: Dimension::Paradigm,
        prompt: "你如何看待\"Scaling Law\"这类现象？",
        option_a: "它暗示了智能背后有根本原则，理解这个\"为什么\"更吸引我。",
        option_b: "它是一个强大的经验性杠杆，首要任务是利用它推动能力边界。",
    },
    Question {
        dimension: Dimension::Paradigm,
        prompt: "面对一个棘手的技术难题（如模型幻觉），你的思路更倾向于？",
        option_a: "从交叉学科中寻找原理性灵感，构建一个能根治问题的新框架。",
        option_b: "系统性地测试社区中各种经验性方案，通过实验迭代找到最优组合。",
    },
    Question {
        dimension: Dimension::Paradigm,
        prompt: "你眼中更\"优雅\"的AI研究是？",
        option_a: "提出一个简洁而深刻的概念（如\"自监督学习\"），能统一解释一系列问题。",
        option_b: "打造一个在多个基准上都表现出极强鲁棒性的系统。",
    },
    Question {
        dimension: Dimension::Paradigm,
        prompt: "在一次头脑风暴中，你更享受扮演什么样的角色？",
        option_a: "提出颠覆性的世界观或抽象框架，负责定义\"为什么这么做\"。",
        option_b: "提出可验证的实验路径和评估方案，负责定义\"应该怎么做\"。",
    },
    Question {
        dimension: Dimension::Paradigm,
        prompt: "在开源你的项目代码时，你的首要关注点是？",
        option_a: "代码的可读性和结构优雅性，确保它能清晰地反映论文的核心思想与抽象。",
        option_b: "一键复现脚本的完备性，确保他人能轻松跑通实验并验证论文里的关键数字。",
    },
    Question {
        dimension: Dimension::Lever,
        prompt: "你认为以下哪句话更能描述AI领域的进步？",
        option_a: "真正的突破源于算法和模型架构的根本性创新。",
        option_b: "真正的突破源于数据质量、规模和多样性的持续提升。",
    },
    Question {
        dimension: Dimension::Lever,
        prompt: "如果一个项目效果未达预期，你会优先从哪个方向寻找解决方案？",
        option_a: "重新审视和设计模型结构，或尝试一种全新的算法范式。",
        option_b: "深入分析和清洗现有数据，或投入精力去获取更好的数据。",
    },
    Question {
        dimension: Dimension::Lever,
        prompt: "一个理想的科研团队，你认为其核心竞争力在于？",
        option_a: "拥有几位在模型设计上充满奇思妙想的天才。",
        option_b: "拥有一个高效严谨的数据工程流程和独家数据集。",
    },
    Question {
        dimension: Dimension::Lever,
        prompt: "在你的日常研究中，哪件事更能让你乐在其中？",
        option_a: "在白板或纸上构思、推演各种新颖的模型组件。",
        option_b: "编写脚本处理海量数据，并从中发现有趣规律。",
    },
    Question {
        dimension: Dimension::Lever,
        prompt: "展望未来，你更期待看到什么样的突破？",
        option_a: "一个像Transformer一样具有普适性的新一代基础模型诞生。",
        option_b: "一套能极大降低数据标注成本的自动化数据引擎问世。",
    },
    Question {
        dimension: Dimension::Lever,
        prompt: "如果项目预算有限，你倾向于将更多资源投入到哪个方面？",
        option_a: "租赁更多的GPU/TPU算力，以支持更复杂的模型训练。",
        option_b: "采购或标注更高质量的数据集，以提升模型的学习上限。",
    },
    Question {
        dimension: Dimension::Lever,
        prompt: "你认为一个AI创业公司更坚实的\"护城河\"是？",
        option_a: "一个难以复制的、性能卓越的专有模型。",
        option_b: "一个通过产品闭环持续积累的专有数据集。",
    },
    Question {
        dimension: Dimension::Lever,
        prompt: "如果让你招募一位新成员，你会优先选择？",
        option_a: "一位在算法和模型理论方面有很深造诣的青年科学家。",
        option_b: "一位在数据系统和工程方面经验丰富的工程师。",
    },
    Question {
        dimension: Dimension::Lever,
        prompt: "当一篇论文的核心贡献是新模型架构时，你的反应是？",
        option_a: "立即去理解这个新架构在设计上的精妙之处。",
        option_b: "先去复现其实验，弄清它成功所依赖的数据和配置。",
    },
    Question {
        dimension: Dimension::Lever,
        prompt: "当模型在某个罕见的测试场景（corner case）下失败时，你认为更根本的解决方案是？",
        option_a: "设计一个更鲁棒的模型架构或训练范式，使其能从逻辑上泛化到未见场景。",
        option_b: "找到或合成更多这类场景的数据，通过数据增强让模型学会处理它。",
    },
    Question {
        dimension: Dimension::Strategy,
        prompt: "你更欣赏哪种类型的科研贡献？",
        option_a: "提出一个可能颠覆主流的全新研究方向，即使它在初期还不成熟。",
        option_b: "在一个主流方向上做出扎实严谨的改进，将性能推向新的高度。",
    },
    Question {
        dimension: Dimension::Strategy,
        prompt: "面对一个高度\"内卷\"的研究领域，你的选择是？",
        option_a: "转向一个全新的、人迹罕至的方向，享受开辟新天地的挑战。",
        option_b: "留下来，相信通过专注和努力，依然能做出有价值的增量贡献。",
    },
    Question {
        dimension: Dimension::Strategy,
        prompt: "在审阅一篇论文时，哪种情况更让你倾向于给出高分？",
        option_a: "想法极具颠覆性，但实验部分略显粗糙，留下了很多开放性问题。",
        option_b: "想法是基于现有工作的改进，但实验部分做得无懈可击，结论非常坚实。",
    },
    Question {
        dimension: Dimension::Strategy,
        prompt: "回顾AI的发展史，哪种进步模式更让你着迷？",
        option_a: "像深度学习取代传统机器学习那样的范式革命。",
        option_b: "像ResNet架构从几十层到上千层的持续演进。",
    },
    Question {
        dimension: Dimension::Strategy,
        prompt: "你的科研\"品味\"更倾向于？",
        option_a: "追求\"高风险、高回报\"的探索，享受从0到1的创造快感。",
        option_b: "追求\"稳扎稳打、精益求精\"，享受从1到100的极致优化。",
    },
    Question {
        dimension: Dimension::Strategy,
        prompt: "在构建代码库时，你的风格更接近？",
        option_a: "倾向于从头搭建一个最适合自己新想法的框架，不畏惧工作量。",
        option_b: "倾向于在成熟框架（如Hugging Face）上做扩展，以确保稳定和高效。",
    },
    Question {
        dimension: Dimension::Strategy,
        prompt: "你如何看待当前最火的SOTA模型？",
        option_a: "它是等待被下一代全新思想所\"颠覆\"的对象。",
        option_b: "它是我们应该深入理解和改进的坚实\"巨人肩膀\"。",
    },
    Question {
        dimension: Dimension::Strategy,
        prompt: "在你的研究工作中，你如何看待详尽的消融实验？",
        option_a: "它是支撑核心创新的必要部分，但我更享受提出颠覆性想法的过程。",
        option_b: "它不仅是验证，更是探索和理解模型的最佳方式，能带来新的洞见。",
    },
    Question {
        dimension: Dimension::Strategy,
        prompt: "在做学术报告时，你喜欢如何开场？",
        option_a: "\"今天我想挑战一下大家对XX问题的传统看法……\"",
        option_b: "\"在之前SOTA工作的基础上，我们通过几个关键改进实现了性能新高……\"",
    },
    Question {
        dimension: Dimension::Strategy,
        prompt: "一个项目的规划，你更喜欢哪种？",
        option_a: "设定一个富有挑战性的最终愿景，给予团队充分的自由度去探索路径。",
        option_b: "设定一系列清晰的、可量化的里程碑，确保每周都能看到稳定的进展。",
    },
];

/// Questions belonging to one dimension, in corpus order.
pub fn questions_for(dimension: Dimension) -> impl Iterator<Item = &'static Question> {
    CORPUS.iter().filter(move |q| q.dimension == dimension)
}
