//! Password generator - synthesizes passwords satisfying a rule set's class minimums.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::charset;
use crate::rules::RuleSet;

impl RuleSet {
    /// Generates a random password using the thread-local generator.
    ///
    /// See [`RuleSet::generate_with`].
    pub fn generate(&self, length: usize) -> SecretString {
        self.generate_with(length, &mut rand::thread_rng())
    }

    /// Generates a random password drawing from `rng`.
    ///
    /// Every class minimum in the rule set is drawn first, in rule order and
    /// additively for repeated rules. The rest is padded from the union of
    /// all classes. Length rules and the space ban are ignored.
    ///
    /// The result is never truncated: when the class minimums add up to more
    /// than `length`, the password is as long as they require.
    pub fn generate_with<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> SecretString {
        let mut buf: Vec<u8> = Vec::with_capacity(length.max(self.required_chars()));

        for (class, count) in self.rules().iter().filter_map(|r| r.class_requirement()) {
            draw(&mut buf, class.pool(), count, rng);
        }

        let required = buf.len();
        if length > required {
            draw(&mut buf, charset::ALL, length - required, rng);
        }

        buf.shuffle(rng);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Generated password: requested {} chars, produced {} ({} from class rules)",
            length,
            buf.len(),
            required
        );

        let password: String = buf.into_iter().map(char::from).collect();
        SecretString::new(password.into())
    }
}

fn draw<R: Rng + ?Sized>(buf: &mut Vec<u8>, pool: &[u8], count: usize, rng: &mut R) {
    buf.extend((0..count).map(|_| pool[rng.gen_range(0..pool.len())]));
}
