#[cfg(test)]
mod test_family_posteriors {
    use heredity::pedigree::common::report::TextReporter;
    use heredity::pedigree::inference::{Inferencer, MarginalTable};
    use heredity::pedigree::model::{GeneCount, ProbabilityTables};
    use heredity::pedigree::scenarios::ScenarioMakerFactory;

    const TOLERANCE: f64 = 1e-9;

    fn run_scenario(name: &str) -> MarginalTable {
        let family = ScenarioMakerFactory::new_shared(name)
            .unwrap()
            .setup_scenario()
            .unwrap();
        Inferencer::new(family, ProbabilityTables::default())
            .unwrap()
            .run_inference()
            .unwrap()
    }

    fn assert_gene(table: &MarginalTable, name: &str, expected: [f64; 3]) {
        let marginals = table.get(name).unwrap();
        for count in GeneCount::ALL {
            let actual = marginals.gene.get(count);
            let wanted = expected[count.as_index()];
            assert!(
                (actual - wanted).abs() < TOLERANCE,
                "{name} gene {count}: {actual} vs {wanted}"
            );
        }
    }

    fn assert_trait(table: &MarginalTable, name: &str, expected_true: f64) {
        let marginals = table.get(name).unwrap();
        assert!(
            (marginals.trait_expression.present - expected_true).abs() < TOLERANCE,
            "{name} trait: {} vs {expected_true}",
            marginals.trait_expression.present
        );
    }

    fn assert_sums_to_one(table: &MarginalTable) {
        for (name, marginals) in table.iter() {
            assert!((marginals.gene.total() - 1.0).abs() < 1e-12, "{name} gene total");
            assert!(
                (marginals.trait_expression.total() - 1.0).abs() < 1e-12,
                "{name} trait total"
            );
        }
    }

    #[test]
    fn test_single_founder_matches_prior() {
        let table = run_scenario("single_founder");
        assert_sums_to_one(&table);
        assert_gene(&table, "Alice", [0.96, 0.03, 0.01]);
        assert_trait(&table, "Alice", 0.96 * 0.01 + 0.03 * 0.56 + 0.01 * 0.65);
    }

    #[test]
    fn test_family0_posteriors() {
        let table = run_scenario("family0");
        assert_sums_to_one(&table);

        assert_gene(&table, "Harry", [0.5351186101, 0.4556982701, 0.0091831197]);
        assert_trait(&table, "Harry", 0.2665112452);
        assert_gene(&table, "James", [0.2917933131, 0.5106382979, 0.1975683891]);
        assert_trait(&table, "James", 1.0);
        assert_gene(&table, "Lily", [0.9827318788, 0.0136490539, 0.0036190673]);
        assert_trait(&table, "Lily", 0.0);
    }

    #[test]
    fn test_family0_child_shifts_away_from_prior() {
        let table = run_scenario("family0");
        let harry = table.get("Harry").unwrap();
        let prior = ProbabilityTables::default();
        assert!(harry.gene.get(GeneCount::Zero) < prior.gene_prior(GeneCount::Zero));
        assert!(harry.gene.get(GeneCount::One) > prior.gene_prior(GeneCount::One));
    }

    #[test]
    fn test_family0_text_report() {
        let table = run_scenario("family0");
        let reporter = TextReporter {
            precision: 4,
            colorize: false,
        };
        let expected = "\
Harry:
  Gene:
    2: 0.0092
    1: 0.4557
    0: 0.5351
  Trait:
    True: 0.2665
    False: 0.7335
James:
  Gene:
    2: 0.1976
    1: 0.5106
    0: 0.2918
  Trait:
    True: 1.0000
    False: 0.0000
Lily:
  Gene:
    2: 0.0036
    1: 0.0136
    0: 0.9827
  Trait:
    True: 0.0000
    False: 1.0000
";
        assert_eq!(reporter.render(&table), expected);
    }

    #[test]
    fn test_family1_posteriors() {
        let table = run_scenario("family1");
        assert_sums_to_one(&table);

        let four_places = |name: &str, expected_gene: [f64; 3], expected_true: f64| {
            let marginals = table.get(name).unwrap();
            for count in GeneCount::ALL {
                let actual = marginals.gene.get(count);
                assert!(
                    (actual - expected_gene[count.as_index()]).abs() < 1e-4,
                    "{name} gene {count}: {actual}"
                );
            }
            assert!((marginals.trait_expression.present - expected_true).abs() < 1e-4);
        };
        four_places("Arthur", [0.8636, 0.1035, 0.0329], 0.0);
        four_places("Charlie", [0.8651, 0.1331, 0.0018], 0.0);
        four_places("Fred", [0.3449, 0.6486, 0.0065], 1.0);
        four_places("Ginny", [0.8168, 0.1805, 0.0027], 0.1110);
        four_places("Molly", [0.8636, 0.1035, 0.0329], 0.0);
        four_places("Ron", [0.8168, 0.1805, 0.0027], 0.1110);
    }

    #[test]
    fn test_siblings_with_same_evidence_agree() {
        let table = run_scenario("family1");
        for (left, right) in [("Ginny", "Ron"), ("Arthur", "Molly")] {
            let left = table.get(left).unwrap();
            let right = table.get(right).unwrap();
            for count in GeneCount::ALL {
                assert!((left.gene.get(count) - right.gene.get(count)).abs() < 1e-12);
            }
            assert!(
                (left.trait_expression.present - right.trait_expression.present).abs() < 1e-12
            );
        }
    }

    #[test]
    fn test_mutation_required_child() {
        let table = run_scenario("mutation_required");
        assert_sums_to_one(&table);

        assert_gene(&table, "Dave", [0.2993278697, 0.6923734139, 0.0082987164]);
        assert_trait(&table, "Dave", 1.0);
        assert_gene(&table, "Bob", [0.8131559740, 0.1240529485, 0.0627910776]);
        assert_trait(&table, "Bob", 0.0);

        // Evidence on the child pulls both parents toward carrying.
        let bob = table.get("Bob").unwrap();
        assert!(bob.gene.get(GeneCount::Zero) < 0.96);
    }

    #[test]
    fn test_mutation_is_the_only_path_when_parents_carry_nothing() {
        // With carrier founders ruled out by the prior, the child can only
        // carry a copy through mutation.
        let mut tables = ProbabilityTables::default();
        tables.gene_prior.zero = 1.0;
        tables.gene_prior.one = 0.0;
        tables.gene_prior.two = 0.0;

        let family = ScenarioMakerFactory::new_shared("mutation_required")
            .unwrap()
            .setup_scenario()
            .unwrap();
        let table = Inferencer::new(family.clone(), tables.clone())
            .unwrap()
            .run_inference()
            .unwrap();
        let dave = table.get("Dave").unwrap();
        assert!(dave.gene.get(GeneCount::One) > 0.0);
        assert!(dave.gene.get(GeneCount::Two) > 0.0);
        assert_eq!(table.get("Bob").unwrap().gene.get(GeneCount::Zero), 1.0);

        // Without mutation the child cannot receive any copy.
        tables.mutation_rate = 0.0;
        let table = Inferencer::new(family, tables).unwrap().run_inference().unwrap();
        assert_eq!(table.get("Dave").unwrap().gene.get(GeneCount::Zero), 1.0);
    }

    #[test]
    fn test_repeated_runs_are_bit_identical() {
        for name in ScenarioMakerFactory::NAMES {
            let first = run_scenario(name);
            let second = run_scenario(name);
            assert_eq!(first, second, "{name}");
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }
}
