// Probe: `customer` is the only role; no other value can even be named.
// This file must NOT compile.

#[derive(Debug)]
enum Role {
    Customer,
}

fn main() {
    let _ok: Role = Role::Customer;
    let _role: Role = Role::Admin;
}
