//! The worksheet content: one ordered list of sections feeding both the
//! print and the slide assembler.

use thirdplane_idf::{
    Card, CardGrid, ComparisonGrid, Document, GridCell, ImageNode, LabeledRow, LabeledTable,
    Node, Quote, RowLayout, RowTint, Section, StyledText,
};
use thirdplane_style::{ColumnWidth, Margins, TextAlign, TextRole};

pub const TITLE: &str = "Characteristics of the Third Plane of Development";
pub const AUTHOR: &str = "Montessori for Adolescents";
pub const SITE_LABEL: &str = "montessoriforadolescents.com";
/// Asset key of the gold logo.
pub const LOGO: &str = "logo";

fn header(text: &str) -> Node {
    Node::SectionHeader(text.to_string())
}

fn sub(text: &str) -> Node {
    Node::SubHeader(text.to_string())
}

fn para(text: &str) -> Node {
    Node::Paragraph(text.to_string())
}

fn bullets(items: &[&str]) -> Node {
    Node::Bullets(items.iter().map(|s| s.to_string()).collect())
}

fn logo(width: f32) -> Node {
    Node::Image(ImageNode {
        src: LOGO.to_string(),
        width,
    })
}

fn cells(pairs: &[(&str, &str)]) -> Vec<GridCell> {
    pairs.iter().map(|(h, b)| GridCell::new(*h, *b)).collect()
}

fn cards(pairs: &[(&str, &str)]) -> Vec<Card> {
    pairs.iter().map(|(t, b)| Card::new(*t, *b)).collect()
}

fn rows(pairs: &[(&str, &str)]) -> Vec<LabeledRow> {
    pairs.iter().map(|(l, b)| LabeledRow::new(*l, *b)).collect()
}

fn cover() -> Section {
    Section::new(
        "cover",
        vec![
            Node::Spacer(60.0),
            logo(100.0),
            Node::Spacer(24.0),
            Node::Text(StyledText::new(
                TextRole::CoverTitle,
                "Montessori for\nAdolescents 101",
            )),
            Node::Spacer(10.0),
            Node::Text(StyledText::new(
                TextRole::CoverSubtitle,
                "Overview of the characteristics, needs,\nand prepared environment.",
            )),
            Node::Spacer(16.0),
            Node::Divider,
            Node::Spacer(6.0),
            Node::Quote(Quote::new(
                "The passage to the third period is also a passage to a development which is not natural, but social. \u{2026} The human personality should be prepared for the unforeseen\u{2014}not only for the immediate environment, but for the whole of the social world.",
                Some("Maria Montessori, From Childhood to Adolescence"),
            )),
            Node::Spacer(30.0),
            Node::Text(StyledText::new(TextRole::SiteLink, SITE_LABEL)),
        ],
    )
}

fn four_planes() -> Section {
    Section::new(
        "four-planes",
        vec![
            header("The Four Planes of Development"),
            Node::Divider,
            para("Maria Montessori observed that human development from birth to maturity (age 24) unfolds across four distinct planes, each lasting approximately six years. Each plane has its own unique characteristics, sensitivities, and developmental needs."),
            Node::Grid(ComparisonGrid {
                widths: vec![ColumnWidth::Star, ColumnWidth::Star],
                heading_align: TextAlign::Left,
                cells: cells(&[
                    ("First Plane (0\u{2013}6)", "The absorbent mind. Sensorial exploration. Creation of the individual self. Dramatic physical growth."),
                    ("Second Plane (6\u{2013}12)", "The reasoning mind. Intellectual exploration. Moral development. Period of calm, stable growth."),
                    ("Third Plane (12\u{2013}18)", "Social rebirth. Creation of the social self. Physical transformation. Emotional intensity."),
                    ("Fourth Plane (18\u{2013}24)", "Maturity. Spiritual and moral independence. Specialization and contribution to society."),
                ]),
            }),
            sub("The Third Plane: A Period of Social Rebirth"),
            para("Montessori described the transition to adolescence as a \u{201c}social rebirth\u{201d}\u{2014}a period as dramatic and transformative as the first plane of development. Just as the young child constructs the individual self, the adolescent constructs the social self."),
            para("There are striking parallels between the First Plane (0\u{2013}6) and the Third Plane (12\u{2013}18):"),
            bullets(&[
                "Both are periods of dramatic physical transformation and rapid growth",
                "Both involve heightened sensitivity, vulnerability, and instability",
                "Both are creative periods where something entirely new is being constructed",
                "Both require specially prepared environments that support the developmental work",
                "In both periods, the child's energy is directed inward toward construction, which can result in decreased outward performance",
            ]),
            Node::Quote(Quote::new(
                "We can establish a parallel between childhood and adolescence. In both we see a creative, constructive period, and in both there appears instability, both physical and mental, and both are periods of transformation.",
                Some("Maria Montessori"),
            )),
        ],
    )
}

fn physical() -> Section {
    Section::new(
        "physical",
        vec![
            header("Physical Characteristics"),
            Node::Divider,
            para("The adolescent's body undergoes profound changes during the Third Plane. Montessori identified three sub-phases within this period, each with distinct physical characteristics:"),
            Node::Grid(ComparisonGrid {
                widths: vec![
                    ColumnWidth::Percent(30.0),
                    ColumnWidth::Percent(30.0),
                    ColumnWidth::Star,
                ],
                heading_align: TextAlign::Center,
                cells: cells(&[
                    ("Preparation\n(Ages 12\u{2013}14)", "Onset of puberty. Rapid, uneven growth. The body becomes awkward and disproportionate. Energy fluctuates unpredictably."),
                    ("Blooming\n(Ages 14\u{2013}16)", "The body fills out and matures. Sexual development progresses. Physical energy increases but remains unsteady. Strength builds."),
                    ("Perfection\n(Ages 16\u{2013}18)", "The body reaches near-adult form. Physical coordination and grace return. Energy stabilizes. The young person becomes physically capable and confident."),
                ]),
            }),
            sub("Key Physical Needs"),
            Node::Table(LabeledTable {
                layout: RowLayout::Beside { label_percent: 22.0 },
                tint: RowTint::Uniform,
                rows: rows(&[
                    ("Fatigue", "Adolescents tire easily and unpredictably. The enormous energy required for physical growth leaves less available for sustained intellectual work. Rest and sleep are essential\u{2014}not laziness."),
                    ("Nutrition", "The growing body has heightened nutritional needs. Montessori emphasized nourishing food\u{2014}ideally grown and prepared by the adolescents themselves. A connection to the source of food supports both physical health and psychological well-being."),
                    ("Exercise", "Physical activity is vital\u{2014}not competitive sport, but purposeful work that engages the body: farming, building, maintaining the environment. The body needs to move and work in service of the community."),
                    ("Illness", "Adolescents are more susceptible to illness during this period of transformation. The immune system is under strain from rapid growth. Adequate rest, nutrition, and time outdoors help support resilience."),
                ]),
            }),
        ],
    )
}

fn psychological() -> Section {
    Section::new(
        "psychological",
        vec![
            header("Psychological Characteristics"),
            Node::Divider,
            para("The psychological landscape of the adolescent is complex and often misunderstood. The dramatic physical changes of this period have equally dramatic psychological effects. This is not a time of intellectual expansion\u{2014}it is a time of inner construction."),
            sub("Emotional Life"),
            bullets(&[
                "Doubts and hesitations: The adolescent questions everything\u{2014}themselves, their abilities, their place in the world.",
                "Violent emotions: Feelings are intense and shift rapidly. Joy, despair, anger, and tenderness coexist.",
                "Impulsivity combined with shyness: Bold one moment, self-conscious the next.",
                "Period of contemplation: A deep need for solitude, reflection, and time to process inner experience.",
            ]),
            sub("Intellectual Life"),
            para("There is often an apparent decrease in intellectual capacity during early adolescence. This is not a decline in intelligence but a redirection of energy\u{2014}the body's enormous growth demands so much that less is available for abstract thinking. This is why Montessori advocated for practical, hands-on learning during this period."),
            sub("Core Sensitivities"),
            Node::Cards(CardGrid {
                columns: 2,
                align: TextAlign::Left,
                gap: 4.0,
                cards: cards(&[
                    ("Personal Dignity", "The adolescent is acutely sensitive to how they are perceived and treated. Criticism and being treated as a child wound deeply. They need to be respected as emerging adults\u{2014}their opinions heard and their competence acknowledged."),
                    ("Justice", "Adolescents develop a powerful sense of right and wrong. They are deeply concerned with fairness\u{2014}both for themselves and for others. This extends to social justice, environmental concerns, and moral questions about society."),
                ]),
            }),
            sub("Imagining the Future"),
            para("The adolescent begins to imagine their future self and their place in the adult world. They wonder: Who will I become? What is my value? How will I contribute? These questions are essential psychological work\u{2014}the adolescent is constructing a vision of their future that will guide their choices and development."),
        ],
    )
}

fn social() -> Section {
    Section::new(
        "social",
        vec![
            header("Social Characteristics"),
            Node::Divider,
            para("The Third Plane is fundamentally a social period. Montessori described the adolescent as a \u{201c}newborn social being\u{201d}\u{2014}someone who is leaving the shelter of the family and stepping into the wider world of society. This transition is as significant as the infant's entry into the physical world."),
            sub("From Family to Society"),
            para("In the third plane, the adolescent's orientation shifts outward from family to peer groups, communities, and society at large. This is not rebellion\u{2014}it is a developmental imperative to construct the social self."),
            sub("Core Social Needs"),
            Node::Table(LabeledTable {
                layout: RowLayout::Stacked,
                tint: RowTint::Alternating,
                rows: rows(&[
                    ("Social Belonging", "The adolescent needs to feel accepted and valued by a group. Peer relationships become central as they learn to navigate social dynamics, resolve conflicts, and contribute to a community."),
                    ("Moral Understanding", "The adolescent now grapples with complex ethical questions and needs opportunities to explore moral dilemmas, discuss values, and develop their own moral framework\u{2014}through real experiences, not lectures."),
                    ("Economic Independence", "The adolescent needs to experience earning through their own productive work\u{2014}not career preparation, but the psychological experience of being capable and contributing to the adult world."),
                ]),
            }),
            sub("Valorization & Erdkinder"),
            para("Montessori used the term \u{201c}valorization\u{201d} to describe the adolescent's need to feel that they are a person of value. This is achieved not through praise or grades but through authentic experiences of competence, responsibility, and service."),
            para("She proposed the Erdkinder (\u{201c}children of the earth\u{201d})\u{2014}a farm school where young people live and work together. Its principles of connection to nature, meaningful work, community living, and economic participation can be adapted to many settings."),
        ],
    )
}

fn needs() -> Section {
    Section::new(
        "needs",
        vec![
            header("What Adolescents Need"),
            Node::Divider,
            para("Understanding the characteristics of the Third Plane leads us to a clear picture of what adolescents need in order to develop fully. Montessori's vision was not merely theoretical\u{2014}she offered practical principles for supporting adolescent development."),
            Node::Cards(CardGrid {
                columns: 2,
                align: TextAlign::Center,
                gap: 4.0,
                cards: cards(&[
                    ("Meaningful Work", "Work that has real purpose and serves the community\u{2014}productive activity that engages both body and mind."),
                    ("A Prepared Environment", "An environment designed for adolescent needs\u{2014}offering physical activity, intellectual engagement, social interaction, solitude, structure, and freedom."),
                    ("Social Experience", "Genuine opportunities to live and work with peers, navigate relationships, and contribute to a community."),
                    ("Real Independence", "The freedom to make real choices and manage real responsibilities\u{2014}with the support of caring adults who trust their emerging competence."),
                ]),
            }),
            sub("Montessori's Vision: A Center of Study and Work"),
            para("Montessori envisioned a \u{201c}Center of Study and Work\u{201d} where academic learning is integrated with productive work, young people live in community, and character development is valued alongside intellectual growth. Key elements include a connection to the land, a student-run business, real-world academics, creative expression, and adult guides who mentor rather than lecture."),
            Node::Spacer(4.0),
            Node::Divider,
            Node::Spacer(4.0),
            Node::Text(
                StyledText::new(TextRole::CalloutTitle, "Learn More")
                    .margin(Margins::ltrb(0.0, 0.0, 0.0, 6.0)),
            ),
            Node::Text(
                StyledText::new(
                    TextRole::Body,
                    "Visit montessoriforadolescents.com for more resources on Montessori for adolescents, live webinars, and to request help starting your own Center for Study and Work.",
                )
                .align(TextAlign::Center)
                .margin(Margins::ltrb(20.0, 0.0, 20.0, 8.0)),
            ),
            logo(35.0),
            Node::Text(
                StyledText::new(
                    TextRole::Fineprint,
                    "Content sourced from AMI Diploma 12\u{2013}18 Theory & Methodology Album and the writings of Maria Montessori.",
                )
                .margin(Margins::ltrb(20.0, 4.0, 20.0, 0.0))
                .opacity(0.7),
            ),
        ],
    )
}

/// The complete worksheet.
pub fn worksheet() -> Document {
    Document {
        title: TITLE.to_string(),
        author: AUTHOR.to_string(),
        footer_label: SITE_LABEL.to_string(),
        sections: vec![
            cover(),
            four_planes(),
            physical(),
            psychological(),
            social(),
            needs(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_then_five_sections() {
        let doc = worksheet();
        let ids: Vec<_> = doc.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["cover", "four-planes", "physical", "psychological", "social", "needs"]
        );
    }

    #[test]
    fn every_section_after_the_cover_opens_with_a_header() {
        let doc = worksheet();
        for section in &doc.sections[1..] {
            assert!(matches!(section.nodes[0], Node::SectionHeader(_)), "{}", section.id);
            assert!(matches!(section.nodes[1], Node::Divider), "{}", section.id);
        }
    }

    #[test]
    fn phase_grid_has_three_columns() {
        let doc = worksheet();
        let grid = doc.sections[2]
            .nodes
            .iter()
            .find_map(|n| match n {
                Node::Grid(g) => Some(g),
                _ => None,
            })
            .unwrap();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 1);
    }
}
