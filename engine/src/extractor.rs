use crate::models::SwotComponents;
use regex::Regex;

const SECTION_HEADERS: [&str; 4] = ["STRENGTHS", "WEAKNESSES", "OPPORTUNITIES", "THREATS"];

// Section names that terminate a fallback-scan span.
const SECTION_BOUNDARIES: [&str; 3] = ["WEAKNESSES", "OPPORTUNITIES", "THREATS"];

// How many lines after a bullet may be folded in as continuations.
const CONTINUATION_WINDOW: usize = 4;

const PLACEHOLDER_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quadrant {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl Quadrant {
    const ALL: [Quadrant; 4] = [
        Quadrant::Strengths,
        Quadrant::Weaknesses,
        Quadrant::Opportunities,
        Quadrant::Threats,
    ];

    fn header(&self) -> &'static str {
        SECTION_HEADERS[*self as usize]
    }

    fn title(&self) -> &'static str {
        match self {
            Quadrant::Strengths => "Strengths",
            Quadrant::Weaknesses => "Weaknesses",
            Quadrant::Opportunities => "Opportunities",
            Quadrant::Threats => "Threats",
        }
    }
}

/// Best-effort extraction of the four bullet lists from the model's markdown.
///
/// Heuristic, not a parser: section headings are matched by name anywhere in a
/// line, bullets by a handful of markdown shapes, and wrapped bullet text is
/// folded back into its bullet. If nothing at all is recognized, a cruder
/// whole-text scan runs, and any quadrant still empty afterwards is filled with
/// placeholder items so the charts never render zero values.
pub fn extract_swot_components(analysis_text: &str) -> SwotComponents {
    let bullet_re = Regex::new(r"^\d[.)] ").unwrap();
    let lines: Vec<&str> = analysis_text.lines().collect();

    let mut sections: [Vec<String>; 4] = Default::default();
    let mut current_section: Option<Quadrant> = None;

    for (i, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim();

        if let Some(quadrant) = section_for_line(line) {
            current_section = Some(quadrant);
        } else if let Some(quadrant) = current_section {
            if line.is_empty() || !is_bullet_line(line, &bullet_re) {
                continue;
            }

            let mut full_point = line.to_string();

            // Fold wrapped lines into the bullet, stopping at the next bullet
            // or section heading.
            for next_raw in lines.iter().skip(i + 1).take(CONTINUATION_WINDOW) {
                let next_line = next_raw.trim();
                if is_bullet_line(next_line, &bullet_re) || mentions_any_header(next_line) {
                    break;
                }
                if !next_line.is_empty() && next_line != "---" {
                    full_point.push(' ');
                    full_point.push_str(next_line);
                }
            }

            sections[quadrant as usize].push(full_point);
        }
    }

    if sections.iter().all(|items| items.is_empty()) {
        fallback_scan(&lines, &bullet_re, &mut sections);
    }

    fill_placeholders(&mut sections);

    let [strengths, weaknesses, opportunities, threats] = sections;
    SwotComponents {
        strengths,
        weaknesses,
        opportunities,
        threats,
    }
}

fn section_for_line(line: &str) -> Option<Quadrant> {
    let upper = line.to_uppercase();
    Quadrant::ALL
        .into_iter()
        .find(|quadrant| upper.contains(quadrant.header()))
}

fn mentions_any_header(line: &str) -> bool {
    let upper = line.to_uppercase();
    SECTION_HEADERS.iter().any(|header| upper.contains(header))
}

fn is_bullet_line(line: &str, bullet_re: &Regex) -> bool {
    line.starts_with("- ")
        || line.starts_with("* ")
        || line.starts_with('•')
        || bullet_re.is_match(line)
}

/// Cruder second pass: locate each section heading by name and harvest every
/// bullet-shaped line up to the next section.
fn fallback_scan(lines: &[&str], bullet_re: &Regex, sections: &mut [Vec<String>; 4]) {
    for quadrant in Quadrant::ALL {
        let Some(start) = lines
            .iter()
            .position(|line| line.to_uppercase().contains(quadrant.header()))
        else {
            continue;
        };

        for raw_line in &lines[start + 1..] {
            let line = raw_line.trim();
            let upper = line.to_uppercase();
            if SECTION_BOUNDARIES
                .iter()
                .any(|boundary| upper.contains(boundary))
            {
                break;
            }
            if is_bullet_line(line, bullet_re) {
                sections[quadrant as usize].push(line.to_string());
            }
        }
    }
}

fn fill_placeholders(sections: &mut [Vec<String>; 4]) {
    for quadrant in Quadrant::ALL {
        let items = &mut sections[quadrant as usize];
        if items.is_empty() {
            for n in 1..=PLACEHOLDER_COUNT {
                items.push(format!("- {} {}", quadrant.title(), n));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_markdown_is_split_into_quadrants() {
        let analysis = "\
## STRENGTHS
- Proprietary NLP models with 92% accuracy.
- Deep bench of PhD-level engineers.

## WEAKNESSES
- Tiny marketing team with limited budget.

## OPPORTUNITIES
- Partnerships with established CRM vendors.
- Expansion into European markets.

## THREATS
- Incumbents shipping competing AI features.
";

        let components = extract_swot_components(analysis);
        assert_eq!(components.strengths.len(), 2);
        assert_eq!(components.weaknesses.len(), 1);
        assert_eq!(components.opportunities.len(), 2);
        assert_eq!(components.threats.len(), 1);
        assert!(components.strengths[0].contains("Proprietary NLP"));
    }

    #[test]
    fn numbered_and_unicode_bullets_are_recognized() {
        let analysis = "\
STRENGTHS
1. Strong balance sheet.
2) Loyal customer base.
• Recognizable brand.

WEAKNESSES
* Aging production lines.
";

        let components = extract_swot_components(analysis);
        assert_eq!(components.strengths.len(), 3);
        assert_eq!(components.weaknesses.len(), 1);
    }

    #[test]
    fn wrapped_bullet_text_is_folded_into_the_bullet() {
        let analysis = "\
STRENGTHS
- Automation program cut defect rates by 65%,
  freeing the QA team for new product lines.

WEAKNESSES
- None noted.
";

        let components = extract_swot_components(analysis);
        assert_eq!(components.strengths.len(), 1);
        assert!(components.strengths[0].ends_with("new product lines."));
    }

    #[test]
    fn continuation_stops_at_next_section_heading() {
        let analysis = "\
STRENGTHS
- Single strength item
WEAKNESSES
- Single weakness item
";

        let components = extract_swot_components(analysis);
        assert_eq!(components.strengths, vec!["- Single strength item"]);
        assert_eq!(components.weaknesses, vec!["- Single weakness item"]);
    }

    #[test]
    fn unrecognizable_text_yields_placeholders() {
        let components = extract_swot_components("The model declined to answer.");
        assert_eq!(components.strengths.len(), PLACEHOLDER_COUNT);
        assert_eq!(components.threats.len(), PLACEHOLDER_COUNT);
        assert_eq!(components.strengths[0], "- Strengths 1");
        assert_eq!(components.threats[5], "- Threats 6");
    }

    #[test]
    fn a_section_with_no_bullets_still_gets_placeholders() {
        let analysis = "\
STRENGTHS
- Real strength.

THREATS
No notable threats were identified in prose form.
";

        let components = extract_swot_components(analysis);
        assert_eq!(components.strengths, vec!["- Real strength."]);
        assert_eq!(components.threats.len(), PLACEHOLDER_COUNT);
    }

    #[test]
    fn bullets_before_any_heading_are_ignored() {
        let analysis = "\
- Orphan bullet with no section.

OPPORTUNITIES
- Real opportunity.
";

        let components = extract_swot_components(analysis);
        assert_eq!(components.opportunities, vec!["- Real opportunity."]);
        assert_eq!(components.strengths.len(), PLACEHOLDER_COUNT);
    }
}
