use crate::models::{ConceptGroup, ConceptPassage};
use uuid::Uuid;

// The retrieval corpus: a fixed set of SWOT methodology passages, five per group.
// These are compiled in; the index is rebuilt from them on every startup.

const STRENGTHS_CONCEPTS: [&str; 5] = [
    "Strengths in a SWOT analysis represent internal capabilities and advantages that help an organization excel. These include technological innovations, skilled workforce, strong brand reputation, efficient processes, and financial resources.",
    "Organizational strengths can be identified through digital transformation initiatives, AI-powered systems, automation capabilities, flexible work policies, and a culture that promotes innovation and continuous improvement.",
    "Strategic strengths include market position, competitive advantage, proprietary technology, strong leadership, and effective operational frameworks that deliver consistent results.",
    "Workforce strengths include diverse talent pool, specialized expertise, strong team collaboration, effective leadership, employee engagement, and professional development programs.",
    "Operational strengths may include streamlined processes, quality management systems, efficient supply chain, scalable infrastructure, and adaptable business models that respond quickly to changes.",
];

const WEAKNESSES_CONCEPTS: [&str; 5] = [
    "Weaknesses in a SWOT analysis identify internal limitations that may hinder organizational performance. These can include legacy systems, inefficient processes, skill gaps, communication barriers, and resource constraints.",
    "Technical weaknesses often manifest as integration problems between new and old systems, data silos, security vulnerabilities, and inadequate infrastructure to support growth initiatives.",
    "Organizational weaknesses may involve unclear communication channels, resistance to change, hierarchical bottlenecks, insufficient training programs, and gaps in knowledge management.",
    "Financial weaknesses could include high operational costs, limited access to capital, cash flow challenges, or insufficient budget allocation for innovation and research initiatives.",
    "Market-related weaknesses might involve limited product range, gaps in service offerings, inconsistent customer experience, weak market presence, or inadequate distribution channels.",
];

const OPPORTUNITIES_CONCEPTS: [&str; 5] = [
    "Opportunities in a SWOT analysis represent external possibilities that an organization can capitalize on. These include emerging markets, technological trends, regulatory changes, competitor weaknesses, and partnership prospects.",
    "Market opportunities involve expansion into international regions, development of new product lines, strategic acquisitions, diversification of supplier networks, and adoption of innovative business models.",
    "Collaborative opportunities include partnerships with technology startups, academic institutions, industry consortiums, and research organizations to accelerate innovation and market penetration.",
    "Technological opportunities encompass adoption of emerging technologies like AI, machine learning, blockchain, IoT, and cloud computing to enhance product offerings or improve operational efficiency.",
    "Sustainability opportunities include developing eco-friendly products, implementing green manufacturing processes, reducing carbon footprint, and meeting growing consumer demand for responsible business practices.",
];

const THREATS_CONCEPTS: [&str; 5] = [
    "Threats in a SWOT analysis identify external challenges that could negatively impact an organization. These include competitive pressures, changing market dynamics, regulatory constraints, economic downturns, and technological disruptions.",
    "Competitive threats often come from rivals implementing advanced technologies like AI agents, aggressive market strategies, new entrants with disruptive models, and industry consolidation that affects market share.",
    "Environmental threats encompass geopolitical tensions, supply chain disruptions, changing consumer preferences, talent shortages, and cybersecurity risks that could compromise operations.",
    "Regulatory threats include changing compliance requirements, industry standards, data protection laws, trade policies, and environmental regulations that increase operational complexity or costs.",
    "Technological threats involve rapid innovation requiring constant adaptation, obsolescence of current products or systems, cybersecurity vulnerabilities, and disruptive technologies that challenge the business model.",
];

const METHODOLOGY_CONCEPTS: [&str; 5] = [
    "A comprehensive SWOT analysis involves systematic evaluation of internal factors (strengths and weaknesses) and external factors (opportunities and threats) using quantitative and qualitative data from multiple sources.",
    "Effective SWOT analysis requires cross-functional input, objective assessment, prioritization of factors based on impact, and alignment with strategic objectives and organizational vision.",
    "SWOT analysis outcomes should inform strategic planning, resource allocation, risk management, and continuous improvement initiatives to maximize advantages and minimize vulnerabilities.",
    "The SWOT framework should be updated regularly as market conditions change, with continual monitoring of identified factors and emerging trends that could affect the organization.",
    "Advanced SWOT methodologies may include weighted scoring systems, impact-likelihood matrices, and scenario planning to refine strategic responses to identified factors.",
];

/// Builds the full corpus in stable order: strengths, weaknesses, opportunities,
/// threats, then general methodology.
pub fn concept_passages() -> Vec<ConceptPassage> {
    let groups: [(ConceptGroup, &[&str; 5]); 5] = [
        (ConceptGroup::Strengths, &STRENGTHS_CONCEPTS),
        (ConceptGroup::Weaknesses, &WEAKNESSES_CONCEPTS),
        (ConceptGroup::Opportunities, &OPPORTUNITIES_CONCEPTS),
        (ConceptGroup::Threats, &THREATS_CONCEPTS),
        (ConceptGroup::Methodology, &METHODOLOGY_CONCEPTS),
    ];

    let mut passages = Vec::with_capacity(25);
    for (group, texts) in groups {
        for text in texts.iter() {
            passages.push(ConceptPassage {
                id: Uuid::new_v4().to_string(),
                group,
                text: (*text).to_string(),
            });
        }
    }

    passages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_has_twenty_five_passages() {
        assert_eq!(concept_passages().len(), 25);
    }

    #[test]
    fn each_group_contributes_five_passages() {
        let passages = concept_passages();
        for group in [
            ConceptGroup::Strengths,
            ConceptGroup::Weaknesses,
            ConceptGroup::Opportunities,
            ConceptGroup::Threats,
            ConceptGroup::Methodology,
        ] {
            let count = passages.iter().filter(|p| p.group == group).count();
            assert_eq!(count, 5, "group {:?} has {} passages", group, count);
        }
    }

    #[test]
    fn passages_are_non_empty_with_unique_ids() {
        let passages = concept_passages();
        let mut ids: Vec<&str> = passages.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), passages.len());
        assert!(passages.iter().all(|p| !p.text.trim().is_empty()));
    }
}
