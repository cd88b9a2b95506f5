//! Enabled-set resolution
//!
//! Output is ordered by option name. The sort is explicit so that callers
//! passing a `HashMap` get the same list as callers passing an `OptionTree`.

use crate::config::PackageIdentifier;
use crate::options::DependencyOption;

/// Selected packages of every enabled option, ordered by option name.
pub fn resolve<'a, K, I>(options: I) -> Vec<PackageIdentifier>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, &'a DependencyOption)>,
{
    let mut enabled: Vec<(K, &DependencyOption)> = options
        .into_iter()
        .filter(|(_, option)| option.enable)
        .collect();

    enabled.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));

    enabled
        .into_iter()
        .map(|(_, option)| option.package.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Catalog, DependencyDefinition};
    use crate::options::synthesize;
    use std::collections::HashMap;

    fn option(package: &str, enable: bool) -> DependencyOption {
        let def = DependencyDefinition::new(package, PackageIdentifier::name(package));
        let mut option = DependencyOption::from_definition(&def).unwrap();
        option.enable = enable;
        option
    }

    #[test]
    fn test_empty_input() {
        let options: HashMap<String, DependencyOption> = HashMap::new();
        assert!(resolve(&options).is_empty());
    }

    #[test]
    fn test_nothing_enabled() {
        let options = HashMap::from([("curl".to_string(), option("curl", false))]);
        assert!(resolve(&options).is_empty());
    }

    #[test]
    fn test_selected_package_override() {
        let catalog = Catalog::from_definitions([
            DependencyDefinition::new("curl", PackageIdentifier::name("curl")),
            DependencyDefinition::new("git", PackageIdentifier::name("git"))
                .with_example(PackageIdentifier::name("gitMinimal")),
        ])
        .unwrap();
        let mut tree = synthesize(&catalog).unwrap();

        let git = tree.get_mut("git").unwrap();
        git.enable = true;
        git.package = PackageIdentifier::name("gitMinimal");

        assert_eq!(tree.resolve(), vec![PackageIdentifier::name("gitMinimal")]);
    }

    #[test]
    fn test_disabled_nested_entry_is_excluded() {
        let catalog = Catalog::from_definitions([
            DependencyDefinition::new("bat", PackageIdentifier::name("bat")),
            DependencyDefinition::new("xxd", PackageIdentifier::path(["unixtools", "xxd"])),
        ])
        .unwrap();
        let mut tree = synthesize(&catalog).unwrap();

        assert!(tree.resolve().is_empty());

        tree.get_mut("bat").unwrap().enable = true;
        let resolved = tree.resolve();
        assert!(!resolved.contains(&PackageIdentifier::path(["unixtools", "xxd"])));
        assert_eq!(resolved, vec![PackageIdentifier::name("bat")]);
    }

    #[test]
    fn test_lexicographic_order() {
        let options = HashMap::from([
            ("coreutils".to_string(), option("coreutils", true)),
            ("bat".to_string(), option("bat", true)),
        ]);
        assert_eq!(
            resolve(&options),
            vec![
                PackageIdentifier::name("bat"),
                PackageIdentifier::name("coreutils")
            ]
        );
    }

    #[test]
    fn test_order_ignores_insertion_order() {
        let forward = vec![
            ("a", option("a", true)),
            ("b", option("b", false)),
            ("c", option("c", true)),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let forward = resolve(forward.iter().map(|(k, v)| (*k, v)));
        let backward = resolve(backward.iter().map(|(k, v)| (*k, v)));
        assert_eq!(forward, backward);
    }
}
