//! Static reference text shown alongside the calculator.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AboutSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AboutPanel {
    pub title: &'static str,
    pub sections: &'static [AboutSection],
    pub references: &'static [&'static str],
}

impl AboutPanel {
    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.title, "=".repeat(self.title.len()));
        for section in self.sections {
            out.push('\n');
            if !section.heading.is_empty() {
                out.push_str(&format!("{}\n{}\n", section.heading, "-".repeat(section.heading.len())));
            }
            for paragraph in section.paragraphs {
                out.push_str(paragraph);
                out.push_str("\n\n");
            }
            for bullet in section.bullets {
                out.push_str(&format!("  - {bullet}\n"));
            }
        }
        out.push_str("\nReferences\n----------\n");
        for reference in self.references {
            out.push_str(&format!("  - {reference}\n"));
        }
        out
    }
}

pub static ABOUT: AboutPanel = AboutPanel {
    title: "About the Hauck-Anderson test",
    sections: &[
        AboutSection {
            heading: "",
            paragraphs: &[
                "The Hauck-Anderson test compares proportions between two groups. It is \
                 especially useful with small samples, where the standard tests may not be \
                 appropriate.",
            ],
            bullets: &[],
        },
        AboutSection {
            heading: "Technical details",
            paragraphs: &[
                "The test is a modification of the conventional Z-test for proportions. It \
                 adjusts the Z statistic with a continuity correction term, 1 / (2 * min(n1, n2)), \
                 which makes it better suited to small samples.",
            ],
            bullets: &[],
        },
        AboutSection {
            heading: "Assumptions",
            paragraphs: &[],
            bullets: &[
                "Independent samples: observations within each sample and between samples must \
                 be independent.",
                "Small sample sizes: the test can be used with samples of any size, but it is \
                 most useful when the samples are small.",
                "Binomial distribution: the proportions must follow a binomial distribution, i.e. \
                 you are observing whether a specific event occurs or not.",
            ],
        },
        AboutSection {
            heading: "Interface controls",
            paragraphs: &[],
            bullets: &[
                "Group proportion: the proportion (as a decimal) of successes or occurrences of \
                 the event of interest in each group.",
                "Sample size: how many observations or individuals there are in each group.",
                "Test type and direction: choose a one- or two-tailed test. For a one-tailed test, \
                 choose the direction of the alternative hypothesis.",
                "Number of tests performed: the number of levels of your scale, or the total \
                 number of tests if you ran several, used to adjust the p-value with the \
                 Bonferroni correction.",
            ],
        },
        AboutSection {
            heading: "Interpreting the results",
            paragraphs: &[],
            bullets: &[
                "Z value: the computed test statistic. It is the number of standard deviations \
                 between the observed difference and the value expected under the null hypothesis.",
                "p-value: the probability of observing a difference at least as extreme as the \
                 one observed if the null hypothesis is true. A small p-value (commonly below \
                 0.05) suggests the difference is statistically significant.",
            ],
        },
        AboutSection {
            heading: "A note on one-tailed tests",
            paragraphs: &[
                "The Hauck-Anderson test can be read one- or two-tailed, but it is most often \
                 used two-tailed. If you choose a one-tailed test, make sure you have a clear \
                 justification for it: one-tailed tests rest on very clear and specific prior \
                 expectations.",
            ],
            bullets: &[],
        },
        AboutSection {
            heading: "The Bonferroni correction",
            paragraphs: &[
                "The Bonferroni correction adjusts the significance of statistical tests when \
                 several comparisons are made. It controls the probability of making at least \
                 one Type I error (a false positive) across all the tests.",
                "With a significance level of 5% there is a 5% chance of wrongly rejecting a \
                 true null hypothesis. Repeating the test on independent data makes the chance \
                 of at least one such error grow with every additional test.",
                "If you run n tests, divide the original significance level (alpha, typically \
                 0.05) by n; for 5 tests use alpha / 5. This calculator applies the equivalent \
                 adjustment to the p-value, multiplying it by n.",
                "Consider the correction when making several independent comparisons on your \
                 data, for example comparing three or more groups pairwise. If specific tests \
                 follow from a hypothesis stated in advance, the correction may not be needed.",
                "The correction is conservative: it lowers the risk of Type I errors but raises \
                 the risk of Type II errors (false negatives). Weigh the two and consider other \
                 correction methods when appropriate.",
            ],
            bullets: &[],
        },
    ],
    references: &[
        "Hauck, W. W., & Anderson, S. (1984). A new statistical procedure for testing \
         equivalence. Pharmacometrics, 26(2), 192-196.",
        "Anderson, S. (1987). The Hauck-Anderson procedure revisited. Biometrics, 43(1), 231-239.",
        "Smith, J. P. (1990). Independence in statistical testing. Statistical Journal, 45(2), \
         112-120.",
        "Jones, D. R. (1995). Binomial distribution in sampling. Sampling Techniques, 3rd ed., \
         250-254.",
        "Bland, J. M., & Altman, D. G. (1995). Multiple significance tests: the Bonferroni \
         method. BMJ, 310(6973), 170.",
    ],
};
