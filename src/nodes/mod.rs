pub mod node;
pub use node::*;

pub mod scalar_value;
pub use scalar_value::*;

pub mod raw_stmt;
pub use raw_stmt::*;

pub mod select_stmt;
pub use select_stmt::*;

pub mod insert_stmt;
pub use insert_stmt::*;

pub mod update_stmt;
pub use update_stmt::*;

pub mod delete_stmt;
pub use delete_stmt::*;

pub mod into_clause;
pub use into_clause::*;

pub mod res_target;
pub use res_target::*;

pub mod sort_by;
pub use sort_by::*;

pub mod range_var;
pub use range_var::*;

pub mod range_subselect;
pub use range_subselect::*;

pub mod range_function;
pub use range_function::*;

pub mod join_expr;
pub use join_expr::*;

pub mod alias;
pub use alias::*;

pub mod bool_expr;
pub use bool_expr::*;

pub mod sub_link;
pub use sub_link::*;

pub mod case_expr;
pub use case_expr::*;

pub use null_test::*;

pub mod row_expr;
pub use row_expr::*;

pub mod set_to_default;
pub use set_to_default::*;

pub mod a_expr;
pub use a_expr::*;

pub mod func_call;
pub use func_call::*;

pub mod type_cast;
pub use type_cast::*;

pub mod column_ref;
pub use column_ref::*;

pub mod a_const;
pub use a_const::*;

pub mod coalesce_expr;
pub use coalesce_expr::*;

pub mod min_max_expr;
pub use min_max_expr::*;

pub mod null_if_expr;
pub use null_if_expr::*;

pub mod a_array_expr;
pub use a_array_expr::*;

pub mod a_indirection;
pub use a_indirection::*;

pub mod collate_clause;
pub use collate_clause::*;

pub mod sql_value_function;
pub use sql_value_function::*;
