pub mod jwt_gate;
