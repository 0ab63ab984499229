//! Rule-based vendor chunk policy.
//!
//! A [`VendorChunkPolicy`] checks its rules in order against a module
//! identifier and returns the chunk name of the first rule that matches.
//! If no rule matches but the identifier came from the dependency root,
//! the catch-all chunk is returned. First-party modules get `None`.

use crate::classifier::ChunkClassifier;
use crate::error::{PolicyError, Result};

/// Conventional path segment for resolved third-party packages.
pub const DEFAULT_DEPENDENCY_ROOT: &str = "node_modules";

/// Chunk receiving third-party modules no rule claimed.
pub const DEFAULT_CATCH_ALL: &str = "vendor";

/// How a rule's package name is compared against the module path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageMatch {
    /// The package name must be exactly this (`p5` but not `p5-extra`).
    #[default]
    Exact,
    /// Any package whose name starts with this (`vue`, `vue-router`, `vuex`).
    Prefix,
}

/// How identifiers are searched for the dependency root and package names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Plain substring containment of `"{root}/{package}"`.
    ///
    /// Loose: `node_modules/p5` also matches `node_modules/p5-extra`, and
    /// `node_modules` anywhere in the path counts as third-party.
    #[default]
    Substring,
    /// Compare whole path segments, splitting on `/` and `\`.
    Segment,
}

/// A single package → chunk rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRule {
    name: String,
    package: String,
    matching: PackageMatch,
}

impl ChunkRule {
    /// Send one named package to chunk `name`.
    pub fn package(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            matching: PackageMatch::Exact,
        }
    }

    /// Send every package whose name starts with `prefix` to chunk `name`.
    pub fn prefix(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: prefix.into(),
            matching: PackageMatch::Prefix,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package_name(&self) -> &str {
        &self.package
    }

    pub fn matching(&self) -> PackageMatch {
        self.matching
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PolicyError::EmptyName { index });
        }
        if self.package.trim().is_empty() {
            return Err(PolicyError::EmptyPackage {
                name: self.name.clone(),
            });
        }
        if self.package.starts_with('/')
            || self.package.ends_with('/')
            || self.package.split('/').any(str::is_empty)
        {
            return Err(PolicyError::InvalidPackage {
                name: self.name.clone(),
                package: self.package.clone(),
            });
        }
        Ok(())
    }
}

/// Compiled rule: the substring needle is built once at policy construction.
#[derive(Debug, Clone)]
struct CompiledRule {
    rule: ChunkRule,
    needle: String,
    segments: Vec<String>,
}

impl CompiledRule {
    fn new(rule: ChunkRule, root: &str) -> Self {
        let needle = format!("{}/{}", root, rule.package);
        let segments = rule.package.split('/').map(str::to_owned).collect();
        Self {
            rule,
            needle,
            segments,
        }
    }

    fn matches_segments(&self, root: &str, parts: &[&str]) -> bool {
        let (last, scope) = match self.segments.split_last() {
            Some(split) => split,
            None => return false,
        };

        parts.iter().enumerate().any(|(i, part)| {
            if *part != root {
                return false;
            }
            let rest = &parts[i + 1..];
            if rest.len() < self.segments.len() {
                return false;
            }
            let scope_matches = scope.iter().zip(rest).all(|(want, got)| want == got);
            let candidate = rest[scope.len()];
            scope_matches
                && match self.rule.matching {
                    PackageMatch::Exact => candidate == last,
                    PackageMatch::Prefix => candidate.starts_with(last.as_str()),
                }
        })
    }
}

/// Ordered vendor chunk rules with a catch-all for other dependencies.
///
/// The default policy keeps `p5` in its own chunk, groups the Vue family
/// into `vue-vendor` and puts every other dependency in `vendor`.
#[derive(Debug, Clone)]
pub struct VendorChunkPolicy {
    rules: Vec<CompiledRule>,
    dependency_root: String,
    catch_all: Option<String>,
    match_mode: MatchMode,
}

impl VendorChunkPolicy {
    pub fn builder() -> VendorChunkPolicyBuilder {
        VendorChunkPolicyBuilder::default()
    }

    pub fn rules(&self) -> impl Iterator<Item = &ChunkRule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    pub fn dependency_root(&self) -> &str {
        &self.dependency_root
    }

    pub fn catch_all(&self) -> Option<&str> {
        self.catch_all.as_deref()
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Distinct chunk names this policy can produce, in rule order.
    pub fn bucket_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.rules.len() + 1);
        let all = self
            .rules
            .iter()
            .map(|compiled| compiled.rule.name.as_str())
            .chain(self.catch_all.as_deref());
        for name in all {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    fn classify_substring(&self, id: &str) -> Option<&str> {
        if let Some(compiled) = self.rules.iter().find(|c| id.contains(c.needle.as_str())) {
            return Some(compiled.rule.name.as_str());
        }
        if id.contains(self.dependency_root.as_str()) {
            return self.catch_all.as_deref();
        }
        None
    }

    fn classify_segments(&self, id: &str) -> Option<&str> {
        let parts: Vec<&str> = id.split(['/', '\\']).collect();
        let root = self.dependency_root.as_str();

        if let Some(compiled) = self
            .rules
            .iter()
            .find(|c| c.matches_segments(root, &parts))
        {
            return Some(compiled.rule.name.as_str());
        }
        if parts.contains(&root) {
            return self.catch_all.as_deref();
        }
        None
    }
}

impl Default for VendorChunkPolicy {
    fn default() -> Self {
        let root = DEFAULT_DEPENDENCY_ROOT;
        Self {
            rules: vec![
                CompiledRule::new(ChunkRule::package("p5", "p5"), root),
                CompiledRule::new(ChunkRule::prefix("vue-vendor", "vue"), root),
            ],
            dependency_root: root.to_string(),
            catch_all: Some(DEFAULT_CATCH_ALL.to_string()),
            match_mode: MatchMode::Substring,
        }
    }
}

impl ChunkClassifier for VendorChunkPolicy {
    fn classify<'a>(&'a self, id: &str) -> Option<&'a str> {
        match self.match_mode {
            MatchMode::Substring => self.classify_substring(id),
            MatchMode::Segment => self.classify_segments(id),
        }
    }
}

/// Builder for [`VendorChunkPolicy`].
///
/// Starts with no rules, the `node_modules` root, the `vendor` catch-all and
/// substring matching.
#[derive(Debug, Clone)]
pub struct VendorChunkPolicyBuilder {
    rules: Vec<ChunkRule>,
    dependency_root: String,
    catch_all: Option<String>,
    match_mode: MatchMode,
}

impl Default for VendorChunkPolicyBuilder {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            dependency_root: DEFAULT_DEPENDENCY_ROOT.to_string(),
            catch_all: Some(DEFAULT_CATCH_ALL.to_string()),
            match_mode: MatchMode::Substring,
        }
    }
}

impl VendorChunkPolicyBuilder {
    pub fn rule(mut self, rule: ChunkRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = ChunkRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn dependency_root(mut self, root: impl Into<String>) -> Self {
        self.dependency_root = root.into();
        self
    }

    pub fn catch_all(mut self, name: impl Into<String>) -> Self {
        self.catch_all = Some(name.into());
        self
    }

    /// Leave unmatched third-party modules to the bundler.
    pub fn no_catch_all(mut self) -> Self {
        self.catch_all = None;
        self
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Validate the rules and compile the policy.
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] for empty chunk or package names, malformed
    /// scoped package names, an empty dependency root or an empty catch-all.
    pub fn build(self) -> Result<VendorChunkPolicy> {
        let root = self.dependency_root.trim();
        if root.is_empty() {
            return Err(PolicyError::EmptyDependencyRoot);
        }
        if let Some(catch_all) = &self.catch_all {
            if catch_all.trim().is_empty() {
                return Err(PolicyError::EmptyCatchAll);
            }
        }
        for (index, rule) in self.rules.iter().enumerate() {
            rule.validate(index)?;
        }

        let rules = self
            .rules
            .into_iter()
            .map(|rule| CompiledRule::new(rule, root))
            .collect();

        Ok(VendorChunkPolicy {
            rules,
            dependency_root: root.to_string(),
            catch_all: self.catch_all,
            match_mode: self.match_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment_policy() -> VendorChunkPolicy {
        VendorChunkPolicy::builder()
            .rule(ChunkRule::package("p5", "p5"))
            .rule(ChunkRule::prefix("vue-vendor", "vue"))
            .match_mode(MatchMode::Segment)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_matches_default_policy() {
        let built = VendorChunkPolicy::builder()
            .rule(ChunkRule::package("p5", "p5"))
            .rule(ChunkRule::prefix("vue-vendor", "vue"))
            .build()
            .unwrap();
        let default = VendorChunkPolicy::default();

        for id in [
            "/repo/node_modules/p5/lib/p5.js",
            "/repo/node_modules/vue-router/dist/vue-router.js",
            "/repo/node_modules/lodash/lodash.js",
            "/repo/src/components/App.vue",
            "",
        ] {
            assert_eq!(built.classify(id), default.classify(id), "id: {id}");
        }
    }

    #[test]
    fn substring_mode_is_loose() {
        let policy = VendorChunkPolicy::default();
        // Exact rules still match longer package names in substring mode.
        assert_eq!(
            policy.classify("/repo/node_modules/p5-extra/index.js"),
            Some("p5")
        );
        // The marker can sit inside an unrelated directory name.
        assert_eq!(
            policy.classify("/repo/my_node_modules_backup/util.js"),
            Some("vendor")
        );
    }

    #[test]
    fn segment_mode_requires_whole_segments() {
        let policy = segment_policy();
        assert_eq!(
            policy.classify("/repo/node_modules/p5-extra/index.js"),
            Some("vendor")
        );
        assert_eq!(
            policy.classify("/repo/my_node_modules_backup/util.js"),
            None
        );
        assert_eq!(
            policy.classify("/repo/src/my-vue-router-demo/node_modules_vue.js"),
            None
        );
        assert_eq!(
            policy.classify("/repo/node_modules/vue-router/dist/vue-router.js"),
            Some("vue-vendor")
        );
        assert_eq!(policy.classify("/repo/node_modules/p5/lib/p5.js"), Some("p5"));
    }

    #[test]
    fn segment_mode_accepts_windows_separators() {
        let policy = segment_policy();
        assert_eq!(
            policy.classify(r"C:\repo\node_modules\vue\dist\vue.js"),
            Some("vue-vendor")
        );
        assert_eq!(
            policy.classify(r"C:\repo\node_modules\lodash\lodash.js"),
            Some("vendor")
        );
    }

    #[test]
    fn segment_mode_finds_nested_pnpm_layout() {
        let policy = segment_policy();
        let id = "/repo/node_modules/.pnpm/p5@1.9.0/node_modules/p5/lib/p5.js";
        assert_eq!(policy.classify(id), Some("p5"));
    }

    #[test]
    fn scoped_packages_match_scope_exactly() {
        let policy = VendorChunkPolicy::builder()
            .rule(ChunkRule::prefix("vue-vendor", "@vue/runtime"))
            .match_mode(MatchMode::Segment)
            .build()
            .unwrap();
        assert_eq!(
            policy.classify("/repo/node_modules/@vue/runtime-dom/dist/index.js"),
            Some("vue-vendor")
        );
        assert_eq!(
            policy.classify("/repo/node_modules/@vue/shared/dist/index.js"),
            Some("vendor")
        );
        assert_eq!(
            policy.classify("/repo/node_modules/@vuex/runtime-dom/index.js"),
            Some("vendor")
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        let policy = VendorChunkPolicy::builder()
            .rule(ChunkRule::prefix("ui", "vue"))
            .rule(ChunkRule::package("router", "vue-router"))
            .build()
            .unwrap();
        assert_eq!(
            policy.classify("/repo/node_modules/vue-router/index.js"),
            Some("ui")
        );
    }

    #[test]
    fn without_catch_all_other_dependencies_have_no_opinion() {
        let policy = VendorChunkPolicy::builder()
            .rule(ChunkRule::package("p5", "p5"))
            .no_catch_all()
            .build()
            .unwrap();
        assert_eq!(policy.classify("/repo/node_modules/lodash/lodash.js"), None);
        assert_eq!(policy.classify("/repo/node_modules/p5/lib/p5.js"), Some("p5"));
    }

    #[test]
    fn custom_dependency_root() {
        let policy = VendorChunkPolicy::builder()
            .dependency_root("vendor_modules")
            .rule(ChunkRule::package("p5", "p5"))
            .build()
            .unwrap();
        assert_eq!(policy.classify("/repo/vendor_modules/p5/p5.js"), Some("p5"));
        assert_eq!(policy.classify("/repo/node_modules/p5/p5.js"), None);
    }

    #[test]
    fn bucket_names_are_distinct_and_ordered() {
        let policy = VendorChunkPolicy::builder()
            .rule(ChunkRule::prefix("vue-vendor", "vue"))
            .rule(ChunkRule::package("vue-vendor", "pinia"))
            .rule(ChunkRule::package("p5", "p5"))
            .build()
            .unwrap();
        assert_eq!(policy.bucket_names(), vec!["vue-vendor", "p5", "vendor"]);
    }

    #[test]
    fn build_rejects_invalid_rules() {
        let err = VendorChunkPolicy::builder()
            .rule(ChunkRule::package("p5", "p5"))
            .rule(ChunkRule::package("  ", "lodash"))
            .build()
            .unwrap_err();
        assert_eq!(err, PolicyError::EmptyName { index: 1 });

        let err = VendorChunkPolicy::builder()
            .rule(ChunkRule::package("p5", ""))
            .build()
            .unwrap_err();
        assert!(matches!(err, PolicyError::EmptyPackage { .. }));

        let err = VendorChunkPolicy::builder()
            .rule(ChunkRule::package("scoped", "@scope/"))
            .build()
            .unwrap_err();
        assert!(matches!(err, PolicyError::InvalidPackage { .. }));

        let err = VendorChunkPolicy::builder()
            .dependency_root("")
            .build()
            .unwrap_err();
        assert_eq!(err, PolicyError::EmptyDependencyRoot);

        let err = VendorChunkPolicy::builder().catch_all(" ").build().unwrap_err();
        assert_eq!(err, PolicyError::EmptyCatchAll);
    }
}
