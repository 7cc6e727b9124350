pub mod table_flow;
