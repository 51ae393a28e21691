use crate::http::types::{Binding, Policy};

impl Policy {
    /// Returns the unconditional binding for `role`, if any.
    pub fn binding(&self, role: &str) -> Option<&Binding> {
        self.binding_index(role).map(|i| &self.bindings[i])
    }

    /// Grants `role` to `member`.
    ///
    /// The member is appended to the existing unconditional binding of the role, or a new
    /// binding is created when the role has none. Returns `false` when the member already has
    /// the role, in which case the policy is left unchanged.
    pub fn add_member(&mut self, role: &str, member: &str) -> bool {
        match self.binding_index(role) {
            Some(index) => {
                let binding = &mut self.bindings[index];
                if binding.members.iter().any(|m| m == member) {
                    return false;
                }
                binding.members.push(member.to_string());
            }
            None => self.bindings.push(Binding {
                role: role.to_string(),
                members: vec![member.to_string()],
                condition: None,
            }),
        }
        true
    }

    /// Revokes `role` from `member`.
    ///
    /// Neither bindings nor members are ordered, so the removed element is swapped with the last
    /// one. A binding left without members is removed from the policy. Returns `false` when the
    /// member does not have the role.
    pub fn remove_member(&mut self, role: &str, member: &str) -> bool {
        let Some(index) = self.binding_index(role) else {
            return false;
        };
        let binding = &mut self.bindings[index];
        let Some(member_index) = binding.members.iter().position(|m| m == member) else {
            return false;
        };
        binding.members.swap_remove(member_index);
        if binding.members.is_empty() {
            self.bindings.swap_remove(index);
        }
        true
    }

    // conditional bindings are keyed by (role, condition) and are left alone
    fn binding_index(&self, role: &str) -> Option<usize> {
        self.bindings
            .iter()
            .position(|b| b.role == role && b.condition.is_none())
    }
}
