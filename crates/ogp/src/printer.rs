//! The recursive printer.
//!
//! Depth-first walk of an object graph into an indented string. Per value:
//! null first, then the terminal-type set, then composite traversal in field
//! declaration order. Indentation is one tab per nesting level and depends
//! only on depth, never on which fields were skipped.
//!
//! There is deliberately no cycle guard: a self-referential graph recurses
//! without bound. The output is for human inspection and literal string
//! comparison in tests, not for parsing back.

use ogp_reflect::{terminal, FieldId, Reflect};
use tracing::debug;

use crate::config::PrintConfig;

impl<T: Reflect> PrintConfig<T> {
    /// Print the full formatted tree for `obj`.
    ///
    /// Every line, including the last, ends with `\n`. A terminal value at
    /// the root renders as its default conversion with no type-name line.
    pub fn print(&self, obj: &T) -> String {
        debug!(config = ?self, "printing object graph");
        let mut out = String::new();
        self.render(Some(obj), 0, &mut out);
        out
    }

    fn render(&self, value: Option<&dyn Reflect>, level: usize, out: &mut String) {
        let Some(value) = value else {
            out.push_str("null\n");
            return;
        };

        if let Some(text) = terminal::render_terminal(value) {
            out.push_str(&text);
            out.push('\n');
            return;
        }

        out.push_str(value.type_name());
        out.push('\n');

        let owner = value.as_any().type_id();
        for field in value.fields() {
            if self.is_type_excluded(field.declared.id) {
                continue;
            }
            if self.is_field_excluded(FieldId::new(owner, field.name)) {
                continue;
            }

            for _ in 0..=level {
                out.push('\t');
            }
            out.push_str(field.name);
            out.push_str(" = ");

            // Overrides apply to non-null values only; null always renders
            // as the literal. A shim that declines falls back to recursion.
            let formatted = field
                .value
                .and_then(|v| self.resolve(owner, &field).and_then(|f| f(v)));
            match formatted {
                Some(text) => {
                    out.push_str(&text);
                    out.push('\n');
                }
                None => self.render(field.value, level + 1, out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ogp_reflect::{reflect_struct, Reflect};

    use crate::config::PrintConfig;
    use crate::culture::Culture;
    use crate::error::ConfigResult;

    struct Person {
        name: String,
        age: i32,
        height: f64,
        father: Option<Box<Person>>,
    }

    reflect_struct!(Person, "Person", {
        name: String = |p| Some(&p.name),
        age: i32 = |p| Some(&p.age),
        height: f64 = |p| Some(&p.height),
        father: Person = |p| p.father.as_deref().map(|f| f as &dyn Reflect),
    });

    struct City {
        name: String,
        population: i32,
        founded: chrono::DateTime<Utc>,
    }

    reflect_struct!(City, "City", {
        name: String = |c| Some(&c.name),
        population: i32 = |c| Some(&c.population),
        founded: chrono::DateTime<Utc> = |c| Some(&c.founded),
    });

    fn alexander() -> Person {
        Person {
            name: "Alexander".to_string(),
            age: 19,
            height: 1.85,
            father: None,
        }
    }

    #[test]
    fn plain_object_prints_type_then_fields_in_declaration_order() {
        let out = PrintConfig::new().print(&alexander());
        assert_eq!(
            out,
            "Person\n\tname = Alexander\n\tage = 19\n\theight = 1.85\n\tfather = null\n"
        );
    }

    #[test]
    fn terminal_value_at_root_prints_bare() {
        assert_eq!(PrintConfig::new().print(&19i32), "19\n");
        assert_eq!(PrintConfig::new().print(&1.5f64), "1.5\n");
        assert_eq!(
            PrintConfig::new().print(&"Alexander".to_string()),
            "Alexander\n"
        );
    }

    #[test]
    fn nested_composite_indents_one_tab_per_level() {
        let junior = Person {
            name: "Junior".to_string(),
            age: 1,
            height: 0.6,
            father: Some(Box::new(alexander())),
        };
        let out = PrintConfig::new().print(&junior);
        assert_eq!(
            out,
            "Person\n\
             \tname = Junior\n\
             \tage = 1\n\
             \theight = 0.6\n\
             \tfather = Person\n\
             \t\tname = Alexander\n\
             \t\tage = 19\n\
             \t\theight = 1.85\n\
             \t\tfather = null\n"
        );
    }

    #[test]
    fn excluded_field_line_is_absent_entirely() {
        let mut config = PrintConfig::<Person>::new();
        config.exclude_field("age").unwrap();
        config.exclude_field("height").unwrap();
        config.exclude_field("father").unwrap();
        let out = config.print(&alexander());
        assert_eq!(out, "Person\n\tname = Alexander\n");
    }

    #[test]
    fn excluded_type_removes_every_field_declared_with_it() {
        let junior = Person {
            name: "Junior".to_string(),
            age: 1,
            height: 0.6,
            father: Some(Box::new(alexander())),
        };
        let mut config = PrintConfig::<Person>::new();
        config.exclude_type::<i32>();
        let out = config.print(&junior);
        // `age` disappears at every nesting level.
        assert_eq!(
            out,
            "Person\n\
             \tname = Junior\n\
             \theight = 0.6\n\
             \tfather = Person\n\
             \t\tname = Alexander\n\
             \t\theight = 1.85\n\
             \t\tfather = null\n"
        );
    }

    #[test]
    fn excluded_type_wins_over_field_formatter() {
        let mut config = PrintConfig::<Person>::new();
        config
            .set_field_formatter("age", |n: &i32| format!("age:{n}"))
            .unwrap();
        config.exclude_type::<i32>();
        let out = config.print(&alexander());
        assert!(!out.contains("age"));
    }

    #[test]
    fn field_formatter_rules_the_field_even_with_type_formatter_present() {
        let mut config = PrintConfig::<Person>::new();
        config.set_type_formatter(|n: &i32| format!("<{n}>"));
        config
            .set_field_formatter("age", |n: &i32| format!("{n} years"))
            .unwrap();
        let out = config.print(&alexander());
        assert!(out.contains("\tage = 19 years\n"));
    }

    #[test]
    fn type_formatter_applies_across_the_graph() {
        let junior = Person {
            name: "Junior".to_string(),
            age: 1,
            height: 0.6,
            father: Some(Box::new(alexander())),
        };
        let mut config = PrintConfig::<Person>::new();
        config.set_type_formatter(|n: &i32| format!("#{n}"));
        let out = config.print(&junior);
        assert!(out.contains("\tage = #1\n"));
        assert!(out.contains("\t\tage = #19\n"));
    }

    #[test]
    fn field_rule_registered_on_owner_reaches_nested_occurrences() {
        let junior = Person {
            name: "Junior".to_string(),
            age: 1,
            height: 0.6,
            father: Some(Box::new(alexander())),
        };
        let mut config = PrintConfig::<Person>::new();
        config
            .set_field_formatter("name", |s: &String| s.to_uppercase())
            .unwrap();
        let out = config.print(&junior);
        assert!(out.contains("\tname = JUNIOR\n"));
        assert!(out.contains("\t\tname = ALEXANDER\n"));
    }

    #[test]
    fn truncation_takes_a_prefix_and_never_pads() {
        let mut config = PrintConfig::<Person>::new();
        config.truncate_string_field("name", 4).unwrap();
        let out = config.print(&alexander());
        assert!(out.contains("\tname = Alex\n"));

        let mut config = PrintConfig::<Person>::new();
        config.truncate_string_field("name", 100).unwrap();
        let out = config.print(&alexander());
        assert!(out.contains("\tname = Alexander\n"));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let mut config = PrintConfig::<Person>::new();
        config.truncate_string_field("name", 3).unwrap();
        let mut person = alexander();
        person.name = "Алексей".to_string();
        let out = config.print(&person);
        assert!(out.contains("\tname = Але\n"));
    }

    #[test]
    fn numeric_culture_groups_digits_in_output() {
        let city = City {
            name: "Tokyo".to_string(),
            population: 13_960_000,
            founded: Utc.with_ymd_and_hms(1457, 1, 1, 0, 0, 0).unwrap(),
        };
        let mut config = PrintConfig::<City>::new();
        config.set_numeric_culture::<i32>(Culture::de_de()).unwrap();
        let out = config.print(&city);
        assert!(out.contains("\tpopulation = 13.960.000\n"));
    }

    #[test]
    fn datetime_field_renders_via_default_conversion() {
        let founded = Utc.with_ymd_and_hms(1457, 1, 1, 0, 0, 0).unwrap();
        let city = City {
            name: "Tokyo".to_string(),
            population: 1,
            founded,
        };
        let out = PrintConfig::new().print(&city);
        assert!(out.contains(&format!("\tfounded = {founded}\n")));
    }

    #[test]
    fn null_field_renders_literal_even_with_formatters_registered() {
        let mut config = PrintConfig::<Person>::new();
        config.set_type_formatter(|_: &Person| "somebody".to_string());
        let out = config.print(&alexander());
        assert!(out.contains("\tfather = null\n"));
    }

    #[test]
    fn chained_configuration_end_to_end() {
        let mut config = PrintConfig::<Person>::new();
        let built: ConfigResult<()> = (|| {
            config
                .exclude_type::<f64>()
                .exclude_field("father")?
                .truncate_string_field("name", 4)?
                .set_field_formatter("age", |n: &i32| format!("{n} y.o."))?;
            Ok(())
        })();
        built.unwrap();
        let out = config.print(&alexander());
        assert_eq!(out, "Person\n\tname = Alex\n\tage = 19 y.o.\n");
    }

    proptest::proptest! {
        #[test]
        fn truncated_length_is_min_of_len_and_actual(
            s in "\\PC{0,40}",
            len in 0isize..60,
        ) {
            let mut config = PrintConfig::<Person>::new();
            config.truncate_string_field("name", len).unwrap();
            let mut person = alexander();
            person.name = s.clone();
            let out = config.print(&person);
            let line = out
                .lines()
                .find(|l| l.starts_with("\tname = "))
                .expect("name line present");
            let printed = &line["\tname = ".len()..];
            let expected: String = s.chars().take(len as usize).collect();
            proptest::prop_assert_eq!(printed, expected.as_str());
        }
    }
}
