use serde::Serialize;

/// Canned organization profiles for one-click analysis from the UI.
#[derive(Debug, Clone, Serialize)]
pub struct SampleOrganization {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn sample_organizations() -> Vec<SampleOrganization> {
    vec![
        SampleOrganization {
            name: "Tech Startup - AI Solutions",
            description: "TechMinds is a 3-year-old tech startup with 50 employees focused on AI-driven customer service solutions. \
They've developed proprietary NLP algorithms that can understand customer sentiment with 92% accuracy and \
resolve common inquiries without human intervention. Their engineering team consists of 30 PhD-level AI \
specialists from top universities, but their marketing department has only 5 employees with limited budget.\n\n\
Their flagship product \"CustomerAI\" has gained 120% user growth over the past year in the North American \
market, with particularly strong adoption in fintech and e-commerce sectors. They've secured $8.5M in \
Series A funding and have a runway of approximately 18 months.\n\n\
Current challenges include scaling their infrastructure to meet growing demand, addressing data privacy \
concerns from potential European clients, and competing against established CRM giants who are rapidly \
developing their own AI capabilities. Their customer acquisition cost is currently $15,000, which is \
higher than industry average, and their sales cycle averages 3-4 months.\n\n\
They're considering strategic partnerships with larger CRM providers, exploring international expansion, \
and debating whether to diversify into adjacent markets like HR automation or remain focused on customer \
service solutions.",
        },
        SampleOrganization {
            name: "Healthcare Network - Regional Provider",
            description: "HealthBridge Network is a regional healthcare system operating for 45 years with 5 hospitals, 20 clinics, \
and over 8,000 employees serving a population of approximately 2 million people across three states. They're \
currently implementing a $45M electronic health records system and expanding telemedicine services, which grew \
350% during the pandemic.\n\n\
Their workforce demographics show challenges with 35% of nurses and 28% of physicians approaching retirement \
age within 5 years. Their main hospital facilities average 32 years in age, with two requiring significant \
infrastructure upgrades estimated at $95M. Their patient satisfaction scores have consistently remained \
above regional averages (4.2/5 vs 3.8/5), and they maintain strong relationships with community organizations \
through their outreach programs that serve 50,000+ underinsured residents annually.\n\n\
Regulatory compliance costs have increased 23% in the past two years, while insurance reimbursement rates \
have only increased 4%. They face growing competition from three urgent care chains and a new specialty \
surgical center in their primary service area. Their rural clinics struggle with staffing and technological \
limitations, with broadband access issues affecting telemedicine implementation in 35% of their service area.\n\n\
They're evaluating potential mergers with complementary healthcare networks, considering specialized service \
lines in oncology and cardiology to increase market differentiation, and exploring innovative payment models \
with major employers in the region to establish direct service contracts.",
        },
        SampleOrganization {
            name: "ManufacturingPlus - Industrial Equipment",
            description: "ManufacturingPlus is a 72-year-old industrial equipment manufacturer with 1,200 employees across 4 production \
facilities and global distribution to 43 countries. Annual revenue is $280M with EBITDA margins declining \
from 18% to 14% over the past three years due to increased material costs and competitive pricing pressures.\n\n\
They've recently invested $35M in automation technology that reduced production time by 40% and defect rates \
by 65%, but required retraining 30% of their workforce. Their R&D department (45 engineers) has developed \
17 patents in the past decade, though their innovation rate lags behind key competitors. Customer retention \
remains strong at 85% for clients over 5+ years, but new customer acquisition has slowed to 3% annual growth.\n\n\
Supply chain disruptions have increased lead times from 45 to 72 days, causing customer satisfaction to drop \
11 percentage points. Three major competitors have emerged from Asian markets with pricing 25-30% lower than \
ManufacturingPlus, though with quality metrics that score 20% lower in independent testing.\n\n\
Environmental regulations in their primary markets are expected to tighten significantly in the next 18 months, \
requiring capital investments estimated at $18-22M. The executive team is divided on whether to pursue \
geographical expansion into emerging markets, increase customization capabilities to differentiate from \
lower-cost competitors, or diversify into service-based revenue streams through predictive maintenance offerings \
and equipment-as-a-service models.",
        },
        SampleOrganization {
            name: "TechEd Solutions - Educational Technology",
            description: "TechEd Solutions is an 8-year-old educational technology company with 175 employees that provides interactive \
learning platforms to K-12 schools, universities, and corporate training departments. Their flagship product \
suite includes adaptive learning algorithms that personalize content delivery based on individual learning \
patterns, which has shown to improve knowledge retention by 47% in controlled studies.\n\n\
The company experienced 215% revenue growth during the pandemic as remote learning became essential, but growth \
has stabilized at 28% annually as schools return to hybrid models. Their current customer base includes 1,350 \
educational institutions serving approximately 2.1 million students. Their development team has strong expertise \
in gamification and learning science with 70% of technical staff holding advanced degrees in relevant fields.\n\n\
Recent challenges include integrating their platform with legacy school management systems (requiring 35% of \
development resources), addressing growing data privacy concerns from parents' groups and regulators, and \
managing the 3.5x increase in server capacity needed during peak usage periods. Customer acquisition costs \
have risen from $8,500 to $12,700 per institution due to longer sales cycles in public education (averaging \
7-9 months).\n\n\
The company is evaluating strategic directions including expanding into international English-speaking markets, \
developing specialized content for STEM education, creating standalone consumer products for homeschooling \
families, and exploring potential acquisition targets among content creation companies to vertically integrate \
their offering.",
        },
        SampleOrganization {
            name: "NovaEdge Industries - Digital Transformation",
            description: "NovaEdge Industries is a 25-year-old manufacturing conglomerate with 3,800 employees across 7 production \
facilities and 12 distribution centers generating $750M in annual revenue. They're undergoing comprehensive \
digital transformation to address efficiency challenges and competitive pressures, having allocated $85M over \
three years for modernization efforts.\n\n\
They've implemented AI-powered quality control systems that reduced defect rates by 78% and predictive \
maintenance algorithms that decreased downtime by 42%. Their flexible work policy implementation for \
non-production staff (approximately 1,200 employees) has improved retention by 23% and expanded their talent \
recruitment geography. Four innovation labs established across different divisions have generated 28 potential \
product improvements, with 12 already in implementation phases.\n\n\
Significant challenges include legacy systems integration, with 65% of their technology infrastructure being \
over 10 years old and requiring complex middleware solutions. Interdepartmental communication remains siloed, \
with satisfaction surveys showing only 37% of employees feel information flows effectively between divisions. \
Competition has intensified with three major rivals adopting similar digital transformation initiatives and \
two new market entrants utilizing completely cloud-native, AI-first approaches to manufacturing.\n\n\
Strategic considerations include potential expansion into Southeast Asian markets where demand is projected to \
grow 38% over five years, establishing technology partnerships with 3-5 carefully selected startups for \
accelerated innovation, and addressing regulatory changes expected in their primary markets that will increase \
compliance reporting requirements by an estimated 200+ hours per month. Supply chain vulnerabilities exposed \
during recent global disruptions showed critical dependencies on single-source suppliers for 23% of essential \
components.",
        },
        SampleOrganization {
            name: "EcoRetail - Sustainable Consumer Goods",
            description: "EcoRetail is a 6-year-old sustainable consumer goods company with 210 employees that designs, manufactures, and \
sells eco-friendly household products through 1,200+ retail partners and their own e-commerce platform. Their \
product line includes 78 items across cleaning supplies, personal care, and home essentials, all using plastic-free \
packaging and biodegradable formulations.\n\n\
The company has achieved 65% year-over-year growth for three consecutive years, with current annual revenue of $42M. \
Their social media presence has grown organically to 2.8M followers across platforms, providing marketing reach at \
30% of the cost of traditional advertising. Their dedicated sustainability team has secured third-party certifications \
for carbon neutrality, fair trade sourcing, and non-toxic ingredients for the entire product catalog.\n\n\
Challenges include managing rapid growth while maintaining product quality, with recent expansion straining their \
quality control systems and resulting in a 3% return rate (up from 1.2%). Supply chain complexities for specialized \
sustainable materials have caused stockouts on 14 popular products during peak seasons. Price points average 15-30% \
higher than conventional alternatives, creating adoption barriers in more price-sensitive market segments.\n\n\
Several major conventional consumer goods companies have launched competing \"green\" product lines with significantly \
larger marketing budgets, though independent testing has shown many competitors' products contain less sustainable \
ingredients. The regulatory landscape is evolving favorably with several states introducing legislation that would \
require improved environmental disclosures that would benefit EcoRetail's transparent practices.\n\n\
Strategic options under consideration include expanding production capacity through a new manufacturing facility, \
developing subscription models to improve customer retention and predictable revenue, exploring international markets \
starting with Canada and the UK, and potentially raising Series B funding to accelerate growth before larger competitors \
can capture market share.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_samples_with_unique_names() {
        let samples = sample_organizations();
        assert_eq!(samples.len(), 6);

        let mut names: Vec<&str> = samples.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn samples_serialize_with_name_and_description() {
        let json = serde_json::to_value(sample_organizations()).unwrap();
        let first = &json[0];
        assert_eq!(first["name"], "Tech Startup - AI Solutions");
        assert!(first["description"].as_str().unwrap().contains("TechMinds"));
    }

    #[test]
    fn descriptions_are_substantial() {
        for sample in sample_organizations() {
            assert!(
                sample.description.len() > 500,
                "{} description is too short",
                sample.name
            );
        }
    }
}
